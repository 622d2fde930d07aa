use std::path::Path;

use indoc::indoc;

use crate::{Config, Error};

pub(crate) fn load<P: AsRef<Path>>(path: P) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    validate(&config)?;

    Ok(config)
}

pub(crate) fn validate(config: &Config) -> crate::Result<()> {
    validate_has_topologies(config)?;
    validate_identity_extraction(config)?;

    Ok(())
}

fn validate_has_topologies(config: &Config) -> crate::Result<()> {
    if config.gateway.topologies.is_empty() {
        return Err(Error::Validation(
            indoc! {r#"
                No gateway topologies configured. Warden requires at least one topology to forward requests to.

                Example configuration:

                  [gateway.topologies.sales]
                  url = "http://127.0.0.1:9090/"
            "#}
            .to_string(),
        ));
    }

    Ok(())
}

fn validate_identity_extraction(config: &Config) -> crate::Result<()> {
    if !config.server.identity.enabled {
        return Err(Error::Validation(
            indoc! {r#"
                Principal extraction is disabled. The authorization gate denies every request it cannot attribute to a principal, so a gateway with extraction disabled serves nothing.

                To fix this, enable identity extraction:

                  [server.identity]
                  enabled = true
                  primary_header = "x-warden-user"
            "#}
            .to_string(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use insta::assert_snapshot;

    use crate::Config;

    #[test]
    fn no_topologies_is_rejected() {
        let config = indoc! {r#"
            [policy_engine]
            url = "http://127.0.0.1:6080/"
        "#};

        let config: Config = toml::from_str(config).unwrap();
        let error = super::validate(&config).unwrap_err();

        assert_snapshot!(error.to_string(), @r#"
        No gateway topologies configured. Warden requires at least one topology to forward requests to.

        Example configuration:

          [gateway.topologies.sales]
          url = "http://127.0.0.1:9090/"
        "#);
    }

    #[test]
    fn disabled_identity_extraction_is_rejected() {
        let config = indoc! {r#"
            [server.identity]
            enabled = false

            [gateway.topologies.sales]
            url = "http://127.0.0.1:9090/"

            [policy_engine]
            url = "http://127.0.0.1:6080/"
        "#};

        let config: Config = toml::from_str(config).unwrap();
        let error = super::validate(&config).unwrap_err();

        assert_snapshot!(error.to_string(), @r#"
        Principal extraction is disabled. The authorization gate denies every request it cannot attribute to a principal, so a gateway with extraction disabled serves nothing.

        To fix this, enable identity extraction:

          [server.identity]
          enabled = true
          primary_header = "x-warden-user"
        "#);
    }

    #[test]
    fn valid_configuration_passes() {
        let config = indoc! {r#"
            [gateway.topologies.sales]
            url = "http://127.0.0.1:9090/"

            [policy_engine]
            url = "http://127.0.0.1:6080/"
        "#};

        let config: Config = toml::from_str(config).unwrap();
        assert!(super::validate(&config).is_ok());
    }
}
