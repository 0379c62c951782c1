//! Typed sub-parsers that turn blocks into model records.
//!
//! Every entity follows the same shape: its own line is the primary value,
//! children that are section keywords it accepts become typed lists, and
//! every other child (with its whole subtree) folds into the description.

use crate::models::{Document, Example, Field, Function, Operator, Param, Type};

use super::{
    classify::{LineKind, SectionKind},
    description::DescriptionBuffer,
    tree::{BlockId, BlockTree},
};

/// Collects the description of `parent`, offering each child to `claim`
/// first. Children that `claim` rejects become description text, except for
/// section keywords nested inside that text, which are offered again.
fn describe<'a>(
    tree: &BlockTree<'a>,
    parent: Option<BlockId>,
    mut claim: impl FnMut(LineKind<'a>, BlockId) -> bool,
) -> String {
    let mut buf = DescriptionBuffer::default();
    for &child in tree.children(parent) {
        let line = tree.line(child);
        if line.is_blank() {
            buf.push_blank();
        } else if !claim(line.kind, child) {
            tree.walk(child, |id, l| match l.kind {
                LineKind::Blank => {
                    buf.push_blank();
                    false
                }
                LineKind::Section(_) if id != child && claim(l.kind, id) => false,
                _ => {
                    buf.push_line(l.content);
                    true
                }
            });
        }
    }
    buf.finish()
}

/// The entity declarations directly under a section keyword.
fn entries(tree: &BlockTree<'_>, section: BlockId) -> impl Iterator<Item = BlockId> {
    let line = tree.line(section);
    let children = tree.children(Some(section));
    if children.iter().all(|&c| tree.line(c).is_blank()) {
        log::debug!(
            "line {}: section `{}` has no entries",
            line.number,
            line.content
        );
    }
    children
        .iter()
        .copied()
        .filter(move |&c| !tree.line(c).is_blank())
}

/// Splits `head rest...` at the first whitespace.
fn split_head(content: &str) -> (&str, &str) {
    match content.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (content, ""),
    }
}

pub fn document(tree: &BlockTree<'_>, name: &str) -> Document {
    let mut path = String::new();
    let mut functions = vec![];
    let mut types = vec![];

    let description = describe(tree, None, |kind, id| match kind {
        LineKind::Path(value) => {
            path = value.to_string();
            drop_children(tree, id, "path directive");
            true
        }
        LineKind::Section(SectionKind::Functions) => {
            functions.extend(entries(tree, id).map(|e| function(tree, e)));
            true
        }
        LineKind::Section(SectionKind::Types) => {
            types.extend(entries(tree, id).map(|e| type_decl(tree, e)));
            true
        }
        _ => false,
    });

    Document {
        name: name.to_string(),
        path,
        description,
        functions,
        types,
    }
}

/// Parses a function or method declaration.
pub fn function(tree: &BlockTree<'_>, id: BlockId) -> Function {
    let mut params = vec![];
    let mut examples = vec![];

    let description = describe(tree, Some(id), |kind, child| match kind {
        LineKind::Section(SectionKind::Params) => {
            params.extend(entries(tree, child).map(|e| param(tree, e)));
            true
        }
        LineKind::Section(SectionKind::Examples) => {
            examples.extend(entries(tree, child).map(|e| example(tree, e)));
            true
        }
        _ => false,
    });

    Function {
        signature: tree.line(id).content.to_string(),
        description,
        params,
        examples,
    }
}

pub fn type_decl(tree: &BlockTree<'_>, id: BlockId) -> Type {
    let mut fields = vec![];
    let mut methods = vec![];
    let mut operators = vec![];
    let mut examples = vec![];

    let description = describe(tree, Some(id), |kind, child| match kind {
        LineKind::Section(SectionKind::Fields) => {
            fields.extend(entries(tree, child).map(|e| field(tree, e)));
            true
        }
        LineKind::Section(SectionKind::Methods) => {
            methods.extend(entries(tree, child).map(|e| function(tree, e)));
            true
        }
        LineKind::Section(SectionKind::Operators) => {
            operators.extend(entries(tree, child).map(|e| operator(tree, e)));
            true
        }
        LineKind::Section(SectionKind::Examples) => {
            examples.extend(entries(tree, child).map(|e| example(tree, e)));
            true
        }
        _ => false,
    });

    Type {
        name: tree.line(id).content.to_string(),
        description,
        fields,
        methods,
        operators,
        examples,
    }
}

pub fn field(tree: &BlockTree<'_>, id: BlockId) -> Field {
    Field {
        name: tree.line(id).content.to_string(),
        description: describe(tree, Some(id), |_, _| false),
    }
}

pub fn param(tree: &BlockTree<'_>, id: BlockId) -> Param {
    let (name, ty) = split_head(tree.line(id).content);
    Param {
        name: name.to_string(),
        ty: ty.to_string(),
        description: describe(tree, Some(id), |_, _| false),
    }
}

pub fn operator(tree: &BlockTree<'_>, id: BlockId) -> Operator {
    drop_children(tree, id, "operator");
    Operator {
        expression: tree.line(id).content.to_string(),
    }
}

pub fn example(tree: &BlockTree<'_>, id: BlockId) -> Example {
    let (filename, name) = split_head(tree.line(id).content);
    Example {
        filename: filename.to_string(),
        name: name.to_string(),
        description: describe(tree, Some(id), |_, _| false),
    }
}

/// Operators and path directives have nowhere to keep nested text.
fn drop_children(tree: &BlockTree<'_>, id: BlockId, what: &str) {
    let nested = tree
        .children(Some(id))
        .iter()
        .filter(|&&c| !tree.line(c).is_blank())
        .count();
    if nested > 0 {
        log::debug!(
            "line {}: ignoring {nested} line(s) nested under {what} `{}`",
            tree.line(id).number,
            tree.line(id).content
        );
    }
}
