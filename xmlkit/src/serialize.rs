use xot::output::{
    xml::{Declaration, Parameters},
    Indentation,
};

/// How nodes are turned into text.
///
/// The default output is not indented and has no XML declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Serialization {
    /// Put nested elements on their own lines, indented by two spaces per
    /// level.
    pub indent: bool,
    /// Leave out the `<?xml ...?>` declaration.
    pub omit_declaration: bool,
}

impl Default for Serialization {
    fn default() -> Self {
        Self {
            indent: false,
            omit_declaration: true,
        }
    }
}

impl Serialization {
    /// Indented output without a declaration.
    pub fn pretty() -> Self {
        Self {
            indent: true,
            omit_declaration: true,
        }
    }

    pub fn indent(mut self, indent: bool) -> Self {
        self.indent = indent;
        self
    }

    pub fn omit_declaration(mut self, omit_declaration: bool) -> Self {
        self.omit_declaration = omit_declaration;
        self
    }

    pub(crate) fn parameters(&self) -> Parameters {
        let indentation = self.indent.then(Indentation::default);
        let declaration = (!self.omit_declaration).then_some(Declaration {
            encoding: None,
            standalone: None,
        });
        Parameters {
            indentation,
            declaration,
            ..Default::default()
        }
    }
}
