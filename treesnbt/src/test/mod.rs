use treenbt::{Compound, Tag};

mod ser;

/// Unwrap the compound made by `tag!({...})`.
fn compound(tag: Tag) -> Compound {
    match tag {
        Tag::Compound(c) => c,
        other => panic!("expected compound, got {:?}", other),
    }
}
