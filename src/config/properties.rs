//! Helpers for building configurations from maps and unwrapping passthrough properties

use crate::config::options::keys::PROPERTIES_PREFIX;
use crate::config::options::{Configuration, OptionDefinition, OptionValue};
use std::collections::HashMap;

/// Create a configuration holding every entry of `map` as a string value
pub fn from_map<I, K, V>(map: I) -> Configuration
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    let mut conf = Configuration::new();
    for (key, value) in map {
        conf.set_string(key.as_ref(), value);
    }
    conf
}

/// Collect the entries whose key starts with `properties.`, with the prefix removed
pub fn get_hoodie_properties(options: &HashMap<String, String>) -> HashMap<String, String> {
    get_hoodie_properties_with_prefix(options, PROPERTIES_PREFIX)
}

/// Collect the entries whose key starts with `prefix`, with the prefix removed.
///
/// Matching is a plain string prefix test; dots carry no special meaning.
pub fn get_hoodie_properties_with_prefix(
    options: &HashMap<String, String>,
    prefix: &str,
) -> HashMap<String, String> {
    options
        .iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(prefix)
                .map(|sub_key| (sub_key.to_string(), value.clone()))
        })
        .collect()
}

/// Copy `conf`, stripping `properties.` from every key that carries it.
///
/// If both `x` and `properties.x` are set, the passthrough value wins.
pub fn flat_options(conf: &Configuration) -> Configuration {
    let map = conf.to_map();
    let mut flat: HashMap<String, String> = HashMap::with_capacity(map.len());

    for (key, value) in &map {
        if !key.starts_with(PROPERTIES_PREFIX) {
            flat.insert(key.clone(), value.clone());
        }
    }
    for (sub_key, value) in get_hoodie_properties(&map) {
        if flat.contains_key(&sub_key) {
            log::warn!(
                "Passthrough property '{}{}' overrides '{}'",
                PROPERTIES_PREFIX,
                sub_key,
                sub_key
            );
        }
        flat.insert(sub_key, value);
    }

    from_map(flat)
}

/// Whether `conf` leaves `option` at its default.
///
/// True when the option has no explicit value, or the explicit value converts to
/// something equal to the default. A value that does not convert counts as changed.
pub fn is_default_value_defined(conf: &Configuration, option: &OptionDefinition) -> bool {
    match conf.get_optional(option) {
        Ok(None) => true,
        Ok(Some(value)) => option.default.as_ref() == Some(&value),
        Err(err) => {
            log::warn!("{:#}", err);
            false
        }
    }
}

/// Explicit values that differ from their option's default, in `options` order
pub fn changed_options<'a>(
    conf: &Configuration,
    options: &'a [OptionDefinition],
) -> Vec<(&'a OptionDefinition, Option<OptionValue>)> {
    options
        .iter()
        .filter(|option| !is_default_value_defined(conf, option))
        .map(|option| (option, conf.get_optional(option).ok().flatten()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{OptionDefBuilder, OptionsRegistry, keys};

    fn map(entries: &[(&str, &str)]) -> HashMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_from_map_stores_strings() {
        let conf = from_map(map(&[("write.tasks", "8"), ("table.type", "MERGE_ON_READ")]));

        assert_eq!(conf.len(), 2);
        assert_eq!(conf.get_raw("write.tasks"), Some(&OptionValue::from("8")));
    }

    #[test]
    fn test_get_hoodie_properties() {
        let props = get_hoodie_properties(&map(&[("properties.x", "y"), ("z", "w")]));
        assert_eq!(props, map(&[("x", "y")]));
    }

    #[test]
    fn test_custom_prefix_is_honoured() {
        let options = map(&[
            ("hoodie.conf.write.tasks", "2"),
            ("properties.x", "y"),
            ("hoodie.confx", "z"),
        ]);
        let props = get_hoodie_properties_with_prefix(&options, "hoodie.conf.");
        assert_eq!(props, map(&[("write.tasks", "2")]));
    }

    #[test]
    fn test_prefix_stripping_is_syntactic() {
        let props = get_hoodie_properties_with_prefix(&map(&[("abc.d", "1")]), "ab");
        assert_eq!(props, map(&[("c.d", "1")]));
    }

    #[test]
    fn test_no_matching_keys() {
        let props = get_hoodie_properties(&map(&[("write.tasks", "4")]));
        assert!(props.is_empty());
    }

    #[test]
    fn test_flat_options() {
        let conf = from_map(map(&[("a", "1"), ("properties.b", "2")]));
        let flat = flat_options(&conf);

        assert_eq!(flat.to_map(), map(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_flat_options_passthrough_wins() {
        let conf = from_map(map(&[("a", "1"), ("properties.a", "2")]));
        let flat = flat_options(&conf);

        assert_eq!(flat.to_map(), map(&[("a", "2")]));
    }

    #[test]
    fn test_is_default_value_defined() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let mut conf = Configuration::new();

        for option in registry.all_options().iter().filter(|o| o.has_default()) {
            assert!(is_default_value_defined(&conf, option), "{}", option.key);
        }

        let write_tasks = registry.require(keys::WRITE_TASKS).unwrap();
        conf.set_integer(keys::WRITE_TASKS, 4);
        assert!(is_default_value_defined(&conf, write_tasks));

        conf.set_string(keys::WRITE_TASKS, "4");
        assert!(is_default_value_defined(&conf, write_tasks));

        conf.set_integer(keys::WRITE_TASKS, 9);
        assert!(!is_default_value_defined(&conf, write_tasks));
    }

    #[test]
    fn test_is_default_value_defined_with_unparseable_value() {
        let option = OptionDefBuilder::new("write", "write.tasks")
            .int_type(4)
            .build()
            .unwrap();
        let conf = from_map(map(&[("write.tasks", "four")]));

        assert!(!is_default_value_defined(&conf, &option));
    }

    #[test]
    fn test_is_default_value_defined_without_default() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let path = registry.require(keys::PATH).unwrap();
        let mut conf = Configuration::new();
        assert!(is_default_value_defined(&conf, path));

        conf.set_string(keys::PATH, "/tmp/t1");
        assert!(!is_default_value_defined(&conf, path));
    }

    #[test]
    fn test_changed_options() {
        let registry = OptionsRegistry::hoodie().unwrap();
        let conf = from_map(map(&[
            (keys::WRITE_TASKS, "4"),
            (keys::READ_TASKS, "16"),
            (keys::PATH, "/data/t1"),
        ]));

        let changed: Vec<_> = changed_options(&conf, registry.all_options())
            .into_iter()
            .map(|(option, value)| (option.key.as_str(), value))
            .collect();
        assert_eq!(
            changed,
            vec![
                (keys::PATH, Some(OptionValue::from("/data/t1"))),
                (keys::READ_TASKS, Some(OptionValue::Int(16))),
            ]
        );
    }
}
