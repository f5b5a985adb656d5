//! The transform engine.
//!
//! Given the raw text of one JavaScript command module, this module
//! applies a fixed, ordered sequence of syntactic rewrites and returns
//! the resulting TypeScript text:
//!
//! 1. rename every top-level class to `UserCommand`
//! 2. remove each class's first constructor, synthesizing an
//!    `@ApplyOptions` decorator when the constructor carried a
//!    recognizable `description`
//! 3. force `Promise<void>` on the lifecycle functions
//! 4. mark the lifecycle methods `public override` and pin their
//!    well-known parameter types
//! 5. import the decorator when step 2 attached one
//!
//! Order matters: the import in step 5 depends on what step 2 did.
//! Every rule is a pure name/pattern match over the parsed tree; rules
//! whose preconditions fail are silent no-ops, and the same input text
//! always yields the same output text.

mod classes;
mod edits;
mod functions;
mod imports;
mod methods;

use sapconv_common::error::ConvertError;

use crate::syntax;
use edits::EditSet;

/// Converts one JavaScript command module to TypeScript.
pub fn convert_source(source: &str) -> Result<String, ConvertError> {
    let tree = syntax::parse(source)?;
    let root = tree.root_node();

    let mut edits = EditSet::new();

    let decorated = classes::apply(&root, source, &mut edits);
    functions::apply(&root, source, &mut edits);
    methods::apply(&root, source, &mut edits);
    if decorated {
        imports::apply(&root, &mut edits);
    }

    Ok(edits.apply(source))
}
