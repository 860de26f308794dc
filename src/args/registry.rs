//! Option and argument declarations.

/// A named option (e.g., `-m`, `--message`).
#[derive(Debug, Clone)]
pub struct OptionDef {
    /// Primary name, used in errors and usage text.
    pub name: &'static str,
    /// Alternative spellings.
    pub aliases: Vec<&'static str>,
    /// Placeholder for the value in usage text; the handler's default if unset.
    pub meta_var: Option<&'static str>,
    /// Human-readable description (for usage text).
    pub description: &'static str,
    /// Parsing fails if the option never appears.
    pub required: bool,
}

impl OptionDef {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            aliases: Vec::new(),
            meta_var: None,
            description: "",
            required: false,
        }
    }

    pub fn alias(mut self, alias: &'static str) -> Self {
        self.aliases.push(alias);
        self
    }

    pub fn meta_var(mut self, meta_var: &'static str) -> Self {
        self.meta_var = Some(meta_var);
        self
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Check if this definition matches the given argument string.
    pub fn matches(&self, arg: &str) -> bool {
        self.name == arg || self.aliases.contains(&arg)
    }

    /// Primary name followed by aliases.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        std::iter::once(self.name).chain(self.aliases.iter().copied())
    }
}

/// A positional argument.
#[derive(Debug, Clone)]
pub struct ArgumentDef {
    /// Placeholder name, used in errors and usage text.
    pub meta_var: &'static str,
    pub description: &'static str,
    pub required: bool,
}

impl ArgumentDef {
    pub fn new(meta_var: &'static str) -> Self {
        Self {
            meta_var,
            description: "",
            required: false,
        }
    }

    pub fn description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
