//! Extraction of bindable methods from C++ headers

use autobind_api::{BindConfig, BindResult, BindingIR, MethodRecord};
use log::{debug, trace, warn};
use std::path::Path;

use crate::access::{AccessState, Action, BodyItem};
use crate::shape;
use crate::syntax::{NodeKind, SourceTree, SyntaxNode};
use crate::walker;

/// Extract bindable methods from C++ header source
pub fn extract(source: &str, file_path: &Path, config: &BindConfig) -> BindResult<BindingIR> {
    let tree = SourceTree::parse(source, file_path)?;
    extract_tree(&tree, config)
}

/// Extract bindable methods from an already parsed header
///
/// Methods come out ordered by class (source order, nested classes after
/// their enclosing class) and then by declaration.
pub fn extract_tree(tree: &SourceTree, config: &BindConfig) -> BindResult<BindingIR> {
    if tree.has_errors() {
        warn!(
            "{}: syntax errors present, unrecognized declarations are skipped",
            tree.file_path().display()
        );
    }

    let mut ir = BindingIR::new(tree.file_path().to_path_buf());

    for class in walker::collect_kind(tree.root(), NodeKind::Class) {
        ClassScan::new(tree, config, class)?.run(&mut ir)?;
    }

    Ok(ir)
}

/// Scan of one class body
struct ClassScan<'t> {
    tree: &'t SourceTree,
    config: &'t BindConfig,
    class_name: &'t str,
    body: Option<SyntaxNode<'t>>,
}

impl<'t> ClassScan<'t> {
    fn new(
        tree: &'t SourceTree,
        config: &'t BindConfig,
        class: SyntaxNode<'t>,
    ) -> BindResult<Self> {
        let name = shape::class_name_of(class)
            .ok_or_else(|| tree.mismatch(class, "class declaration without a name"))?;

        Ok(Self {
            tree,
            config,
            class_name: name.text(),
            body: shape::class_body_of(class),
        })
    }

    fn run(&self, ir: &mut BindingIR) -> BindResult<()> {
        let Some(body) = self.body else {
            trace!("{}: no body, skipped", self.class_name);
            return Ok(());
        };

        debug!("class {}", self.class_name);
        ir.add_class(self.class_name);

        let mut state = AccessState::default();
        for child in body.children() {
            let (next, action) = state.step(self.classify(child));
            state = next;

            match action {
                Action::Ignore => {}
                Action::Suppress => {
                    debug!("{}: suppressed {:?}", self.class_name, child);
                    ir.suppressed += 1;
                }
                Action::Inspect => {
                    if let Some(method) = self.method_of(child)? {
                        debug!("{}::{} selected", self.class_name, method.name);
                        ir.add_method(method);
                    }
                }
            }
        }

        Ok(())
    }

    fn classify(&self, child: SyntaxNode<'_>) -> BodyItem {
        match child.kind() {
            NodeKind::AccessSpecifier => BodyItem::AccessSpecifier {
                public: child.text().trim_end_matches(':').trim_end() == "public",
            },
            NodeKind::Comment if self.config.is_suppression_marker(child.text()) => {
                BodyItem::SuppressionMarker
            }
            kind if kind.is_member_declaration() => BodyItem::Declaration,
            _ => BodyItem::Other,
        }
    }

    /// Method record for a public member declaration, `None` if it is not bound
    fn method_of(&self, declaration: SyntaxNode<'t>) -> BindResult<Option<MethodRecord>> {
        let is_static = shape::is_static(declaration);

        let Some(declarator) = shape::function_declarator_of(declaration) else {
            trace!("{}: {:?} is not a method", self.class_name, declaration);
            return Ok(None);
        };

        let name = shape::declarator_name_of(declarator)
            .ok_or_else(|| self.tree.mismatch(declarator, "function declarator without a name"))?
            .text();

        let parameters = shape::parameters_of(declarator).ok_or_else(|| {
            self.tree
                .mismatch(declarator, format!("`{}` has no parameter list", name))
        })?;

        let mut record = MethodRecord::new(self.class_name, name);
        record.is_static = is_static;

        for parameter in &parameters {
            let identifier = shape::parameter_name_of(*parameter).ok_or_else(|| {
                self.tree.mismatch(
                    *parameter,
                    format!("parameter of `{}` has no identifier", name),
                )
            })?;
            record.parameters.push(identifier.text().to_string());
        }

        if record.parameters.is_empty() && record.is_special_member() {
            trace!("{}: trivial {} skipped", self.class_name, name);
            return Ok(None);
        }

        for parameter in parameters
            .iter()
            .filter(|p| p.kind() == NodeKind::OptionalParameter)
        {
            let value = shape::default_value_of(*parameter).ok_or_else(|| {
                self.tree.mismatch(
                    *parameter,
                    format!("defaulted parameter of `{}` has no value", name),
                )
            })?;
            record.default_values.push(value.text().to_string());
        }

        Ok(Some(record))
    }
}
