use crate::interpreter::builtins;
use crate::value::Value;
use indexmap::IndexMap;

/// The single flat name -> value mapping shared by a whole interpreter run.
///
/// SudoSharp has no scoping: user variables, the loop counter `i`, and every
/// imported built-in live in one case-sensitive namespace, so an assignment
/// can permanently shadow a built-in name. Bindings are only ever overwritten,
/// never removed.
#[derive(Debug, Clone)]
pub struct Environment {
    bindings: IndexMap<String, Value>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create an environment pre-seeded with the built-in constants.
    pub fn new() -> Self {
        let mut env = Self { bindings: IndexMap::new() };
        for (name, value) in builtins::constants() {
            env.set(name.to_string(), value);
        }
        env
    }

    pub fn get(&self, name: &str) -> Option<Value> {
        self.bindings.get(name).cloned()
    }

    pub fn set(&mut self, name: String, value: Value) {
        self.bindings.insert(name, value);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// All bindings in insertion order.
    pub fn bindings(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.bindings.iter().map(|(name, value)| (name.as_str(), value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_set_get() {
        let mut env = Environment::new();
        env.set("x".to_string(), Value::Int(42));
        assert_eq!(env.get("x"), Some(Value::Int(42)));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut env = Environment::new();
        env.set("Name".to_string(), Value::string("Ada"));
        assert_eq!(env.get("name"), None);
        assert_eq!(env.get("Name"), Some(Value::string("Ada")));
    }

    #[test]
    fn test_seeded_constants() {
        let env = Environment::new();
        assert_eq!(env.get("pi"), Some(Value::Float(std::f64::consts::PI)));
        assert_eq!(env.get("e"), Some(Value::Float(std::f64::consts::E)));
    }

    #[test]
    fn test_constants_can_be_shadowed() {
        let mut env = Environment::new();
        env.set("pi".to_string(), Value::Int(3));
        assert_eq!(env.get("pi"), Some(Value::Int(3)));
    }

    #[test]
    fn test_overwrite_keeps_single_binding() {
        let mut env = Environment::new();
        env.set("x".to_string(), Value::Int(1));
        env.set("x".to_string(), Value::string("now a string"));
        assert_eq!(env.get("x"), Some(Value::string("now a string")));
        assert_eq!(env.bindings().filter(|(name, _)| *name == "x").count(), 1);
    }
}
