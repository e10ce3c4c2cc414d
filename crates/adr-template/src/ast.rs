//! AST produced by the template parser.

/// One node of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Literal text, copied verbatim.
    Text(String),
    /// `{{.Name}}`
    Field(String),
    /// `{{if .Name}}then{{else}}otherwise{{end}}`
    If {
        field: String,
        then: Vec<Node>,
        otherwise: Vec<Node>,
    },
    /// `{{range .Name}}body{{end}}`, with each element as the innermost scope.
    Range { field: String, body: Vec<Node> },
}
