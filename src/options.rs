/// Feature flags controlling which optional files and content variants are
/// generated. Built once from CLI flags and never mutated afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    pub typescript: bool,
    pub redux: bool,
    pub socketio: bool,
    pub docker: bool,
}

impl Options {
    /// Extension for React component files. Chosen once per run so every
    /// component file in the output uses the same one.
    pub fn component_ext(&self) -> &'static str {
        if self.typescript {
            "tsx"
        } else {
            "jsx"
        }
    }

    /// Extension for plain (non-JSX) module files.
    pub fn module_ext(&self) -> &'static str {
        if self.typescript {
            "ts"
        } else {
            "js"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_all_off() {
        let options = Options::default();

        assert!(!options.typescript);
        assert!(!options.redux);
        assert!(!options.socketio);
        assert!(!options.docker);
    }

    #[test]
    fn extensions_follow_the_typescript_flag() {
        let plain = Options::default();
        assert_eq!(plain.component_ext(), "jsx");
        assert_eq!(plain.module_ext(), "js");

        let typed = Options {
            typescript: true,
            ..Options::default()
        };
        assert_eq!(typed.component_ext(), "tsx");
        assert_eq!(typed.module_ext(), "ts");
    }
}
