use std::collections::BTreeMap;

use crate::{config::Config, errors::AppError, price_unit::PriceUnit};

/// Named price units built from configuration.
#[derive(Debug, Clone, Default)]
pub struct PriceUnits {
    units: BTreeMap<String, PriceUnit>,
}

impl PriceUnits {
    /// Builds and validates one unit per configured name.
    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        let mut units = Self::default();
        for (name, locale) in &config.price_units {
            units.insert(name, PriceUnit::from(locale.clone()))?;
        }
        Ok(units)
    }

    pub fn insert(&mut self, name: impl Into<String>, unit: PriceUnit) -> Result<(), AppError> {
        let name = name.into();
        unit.validate()?;
        tracing::debug!(%name, "registered price unit");
        self.units.insert(name, unit);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Result<&PriceUnit, AppError> {
        self.units
            .get(name)
            .ok_or_else(|| AppError::UnknownPriceUnit(name.to_string()))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.units.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::{DEFAULT_PRICE_UNIT, WON_PRICE_UNIT},
        locale::Locale,
    };

    #[test]
    fn builds_default_units() {
        let units = PriceUnits::from_config(&Config::default()).unwrap();
        assert_eq!(units.len(), 2);
        assert_eq!(
            units.get(DEFAULT_PRICE_UNIT).unwrap().locale(),
            Some(&Locale::us())
        );
        assert_eq!(
            units.get(WON_PRICE_UNIT).unwrap().locale(),
            Some(&Locale::korea())
        );
        assert_eq!(
            units.names().collect::<Vec<_>>(),
            vec![DEFAULT_PRICE_UNIT, WON_PRICE_UNIT]
        );
    }

    #[test]
    fn unknown_name_is_an_error() {
        let units = PriceUnits::from_config(&Config::default()).unwrap();
        let err = units.get("euroPriceUnit").unwrap_err();
        assert!(matches!(err, AppError::UnknownPriceUnit(ref name) if name == "euroPriceUnit"));
    }

    #[test]
    fn insert_rejects_broken_unit() {
        let broken: PriceUnit = serde_json::from_str("{}").unwrap();
        let mut units = PriceUnits::default();
        assert!(units.insert("broken", broken).is_err());
        assert!(units.is_empty());
    }
}
