use super::error::Error;
use serde::Deserialize;
use std::sync::OnceLock;

const DEFAULT_GEOMETRY_TOML: &str = include_str!("../../resources/default.geometry.toml");

static DEFAULT_PARAMS: OnceLock<GeometryParams> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GeometryParams {
    #[serde(default)]
    pub bonds: BondLengths,
    #[serde(default)]
    pub naming: NamingParams,
}

/// Canonical bond lengths in Ångströms.
#[derive(Debug, Clone, Deserialize)]
pub struct BondLengths {
    #[serde(default = "default_cc")]
    pub cc: f64,
    #[serde(default = "default_ch")]
    pub ch: f64,
}

fn default_cc() -> f64 {
    1.4
}
fn default_ch() -> f64 {
    1.1
}

impl Default for BondLengths {
    fn default() -> Self {
        Self {
            cc: default_cc(),
            ch: default_ch(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct NamingParams {
    #[serde(default = "default_hydrogen_prefix")]
    pub hydrogen_prefix: String,
}

fn default_hydrogen_prefix() -> String {
    "H".to_string()
}

impl Default for NamingParams {
    fn default() -> Self {
        Self {
            hydrogen_prefix: default_hydrogen_prefix(),
        }
    }
}

impl GeometryParams {
    fn validate(self) -> Result<Self, Error> {
        check_length("bonds.cc", self.bonds.cc)?;
        check_length("bonds.ch", self.bonds.ch)?;
        if self.naming.hydrogen_prefix.is_empty() {
            return Err(Error::InvalidParameter {
                name: "naming.hydrogen_prefix",
                value: "\"\"".to_string(),
            });
        }
        Ok(self)
    }
}

fn check_length(name: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::InvalidParameter {
            name,
            value: value.to_string(),
        })
    }
}

pub fn load_parameters(custom_toml: Option<&str>) -> Result<GeometryParams, Error> {
    match custom_toml {
        Some(toml) => {
            let params: GeometryParams = toml::from_str(toml)?;
            params.validate()
        }
        None => Ok(get_default_parameters().clone()),
    }
}

pub fn get_default_parameters() -> &'static GeometryParams {
    DEFAULT_PARAMS.get_or_init(|| {
        toml::from_str(DEFAULT_GEOMETRY_TOML)
            .expect("Failed to parse embedded default geometry. This is a library bug.")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_parameters_carry_canonical_lengths() {
        let params = get_default_parameters();
        assert_eq!(params.bonds.cc, 1.4);
        assert_eq!(params.bonds.ch, 1.1);
        assert_eq!(params.naming.hydrogen_prefix, "H");
    }

    #[test]
    fn custom_parameters_override_single_field() {
        let custom = r#"
            [bonds]
            cc = 1.54
        "#;
        let params = load_parameters(Some(custom)).unwrap();
        assert_eq!(params.bonds.cc, 1.54);
        assert_eq!(params.bonds.ch, 1.1);
        assert_eq!(params.naming.hydrogen_prefix, "H");
    }

    #[test]
    fn empty_document_falls_back_to_defaults() {
        let params = load_parameters(Some("")).unwrap();
        assert_eq!(params.bonds.cc, 1.4);
        assert_eq!(params.bonds.ch, 1.1);
    }

    #[test]
    fn errors_on_invalid_custom_toml() {
        let result = load_parameters(Some("not valid [[[toml"));
        assert!(matches!(result, Err(Error::ParameterParse(_))));
    }

    #[test]
    fn rejects_non_positive_bond_length() {
        let result = load_parameters(Some("[bonds]\nch = -1.0\n"));
        match result {
            Err(Error::InvalidParameter { name, .. }) => assert_eq!(name, "bonds.ch"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn rejects_empty_hydrogen_prefix() {
        let result = load_parameters(Some("[naming]\nhydrogen_prefix = \"\"\n"));
        assert!(matches!(
            result,
            Err(Error::InvalidParameter {
                name: "naming.hydrogen_prefix",
                ..
            })
        ));
    }
}
