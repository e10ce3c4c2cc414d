//! # adr-template
//!
//! Template language for record and index documents, parsed with a pest
//! PEG grammar (`src/template.pest`).
//!
//! A template is literal markdown with actions in double braces:
//! `{{.Field}}`, `{{if .Field}}..{{else}}..{{end}}` and
//! `{{range .List}}..{{end}}`. Templates render against any
//! [`serde::Serialize`] context, looked up by field name.

pub mod ast;
pub mod builtin;
mod render;

use pest::iterators::{Pair, Pairs};
use pest::Parser;
use pest_derive::Parser;
use serde::Serialize;

use adr_core::error::TemplateError;

pub use ast::Node;
pub use builtin::{
    builtin_record_template, index_template, load_record_template, BUILTIN_RECORD_TEMPLATES,
};

#[derive(Parser)]
#[grammar = "template.pest"]
struct TemplateParser;

/// A parsed template, ready to render any number of times.
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    nodes: Vec<Node>,
}

impl Template {
    /// Parse template text.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError::Syntax`] for unterminated or unknown actions
    /// and unbalanced `{{end}}` tags.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut pairs = TemplateParser::parse(Rule::template, source)
            .map_err(|e| TemplateError::Syntax(e.to_string()))?;
        let template = next_pair(&mut pairs)?;
        let block = next_pair(&mut template.into_inner())?;
        Ok(Self {
            nodes: build_block(block)?,
        })
    }

    /// The parsed nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Render against a serializable context.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateError`] if the context cannot be serialized or a
    /// referenced field is missing.
    pub fn render<T: Serialize>(&self, context: &T) -> Result<String, TemplateError> {
        let value =
            serde_json::to_value(context).map_err(|e| TemplateError::Context(e.to_string()))?;
        render::render(&self.nodes, &value)
    }
}

fn next_pair<'i>(pairs: &mut Pairs<'i, Rule>) -> Result<Pair<'i, Rule>, TemplateError> {
    pairs
        .next()
        .ok_or_else(|| TemplateError::Syntax("unexpected end of template".to_string()))
}

fn build_block(block: Pair<'_, Rule>) -> Result<Vec<Node>, TemplateError> {
    block.into_inner().map(build_node).collect()
}

fn build_node(pair: Pair<'_, Rule>) -> Result<Node, TemplateError> {
    match pair.as_rule() {
        Rule::text => Ok(Node::Text(pair.as_str().to_string())),
        Rule::field => {
            let path = next_pair(&mut pair.into_inner())?;
            Ok(Node::Field(field_name(&path)))
        }
        Rule::if_block => {
            let mut inner = pair.into_inner();
            let field = field_name(&next_pair(&mut inner)?);
            let then = build_block(next_pair(&mut inner)?)?;
            let otherwise = match inner.next() {
                Some(else_branch) => build_block(next_pair(&mut else_branch.into_inner())?)?,
                None => Vec::new(),
            };
            Ok(Node::If {
                field,
                then,
                otherwise,
            })
        }
        Rule::range_block => {
            let mut inner = pair.into_inner();
            let field = field_name(&next_pair(&mut inner)?);
            let body = build_block(next_pair(&mut inner)?)?;
            Ok(Node::Range { field, body })
        }
        other => Err(TemplateError::Syntax(format!("unexpected {other:?}"))),
    }
}

fn field_name(path: &Pair<'_, Rule>) -> String {
    path.as_str().trim_start_matches('.').to_string()
}
