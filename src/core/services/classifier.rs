use crate::core::errors::Result;
use crate::core::models::target::Target;
use crate::core::traits::operator::Operator;

/// Decides which keys get pinned to the target slot instead of
/// swapping with it.
///
/// Production never carries sticky markers; for a slot target the
/// operator either accepts the configured default candidates (those
/// actually present in the loaded file) or hand-picks a subset.
pub struct SlotSettingClassifier<'a> {
    operator: &'a dyn Operator,
    default_candidates: &'a [String],
}

impl<'a> SlotSettingClassifier<'a> {
    pub fn new(operator: &'a dyn Operator, default_candidates: &'a [String]) -> Self {
        Self {
            operator,
            default_candidates,
        }
    }

    /// Classify the available keys for this target.
    ///
    /// Returns the set of keys to mark slot-sticky; empty for
    /// production targets, always, without prompting.
    pub fn classify(&self, target: &Target, available_keys: &[String]) -> Result<Vec<String>> {
        if target.is_production() {
            return Ok(Vec::new());
        }

        let defaults: Vec<String> = self
            .default_candidates
            .iter()
            .filter(|k| available_keys.contains(*k))
            .cloned()
            .collect();

        if !defaults.is_empty() {
            let prompt = format!(
                "Pin the usual environment-specific keys to this slot? ({})",
                defaults.join(", ")
            );
            if self.operator.confirm(&prompt, true)? {
                return Ok(defaults);
            }
        }

        self.operator
            .choose_many("Keys to pin to this slot", available_keys)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Script {
        confirms: Mutex<Vec<bool>>,
        selection: Vec<String>,
        prompted: Mutex<bool>,
    }

    impl Script {
        fn new(confirms: &[bool], selection: &[&str]) -> Self {
            Self {
                confirms: Mutex::new(confirms.to_vec()),
                selection: selection.iter().map(|s| s.to_string()).collect(),
                prompted: Mutex::new(false),
            }
        }
    }

    impl Operator for Script {
        fn confirm(&self, _prompt: &str, _default: bool) -> Result<bool> {
            *self.prompted.lock().unwrap() = true;
            Ok(self.confirms.lock().unwrap().remove(0))
        }

        fn choose_one(&self, _prompt: &str, _options: &[String], _default: usize) -> Result<String> {
            unreachable!("classifier never single-selects")
        }

        fn choose_many(&self, _prompt: &str, _options: &[String]) -> Result<Vec<String>> {
            *self.prompted.lock().unwrap() = true;
            Ok(self.selection.clone())
        }

        fn input(&self, _prompt: &str) -> Result<String> {
            unreachable!("classifier never asks for text")
        }

        fn show(&self, _message: &str) {}
    }

    fn keys(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn production_is_always_empty_and_silent() {
        let operator = Script::new(&[], &[]);
        let candidates = keys(&["NODE_ENV"]);
        let classifier = SlotSettingClassifier::new(&operator, &candidates);

        let result = classifier
            .classify(
                &Target::new("foo", "bar", "production"),
                &keys(&["NODE_ENV", "PORT"]),
            )
            .unwrap();

        assert!(result.is_empty());
        assert!(!*operator.prompted.lock().unwrap());
    }

    #[test]
    fn accepted_defaults_are_intersected_with_available_keys() {
        let operator = Script::new(&[true], &[]);
        let candidates = keys(&["NODE_ENV", "DATABASE_URL", "API_KEY"]);
        let classifier = SlotSettingClassifier::new(&operator, &candidates);

        let result = classifier
            .classify(
                &Target::new("foo", "bar", "staging"),
                &keys(&["NODE_ENV", "API_KEY", "PORT"]),
            )
            .unwrap();

        assert_eq!(result, keys(&["NODE_ENV", "API_KEY"]));
    }

    #[test]
    fn declined_defaults_fall_back_to_manual_selection() {
        let operator = Script::new(&[false], &["PORT"]);
        let candidates = keys(&["NODE_ENV"]);
        let classifier = SlotSettingClassifier::new(&operator, &candidates);

        let result = classifier
            .classify(
                &Target::new("foo", "bar", "staging"),
                &keys(&["NODE_ENV", "PORT"]),
            )
            .unwrap();

        assert_eq!(result, keys(&["PORT"]));
    }

    #[test]
    fn no_matching_defaults_skips_straight_to_manual_selection() {
        let operator = Script::new(&[], &[]);
        let candidates = keys(&["NODE_ENV"]);
        let classifier = SlotSettingClassifier::new(&operator, &candidates);

        let result = classifier
            .classify(&Target::new("foo", "bar", "staging"), &keys(&["PORT"]))
            .unwrap();

        assert!(result.is_empty());
    }
}
