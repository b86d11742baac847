use indexmap::IndexMap;

use crate::ir::Ty;

/// Collects alternative types, deduplicated by rendered text in first-seen order.
#[derive(Debug, Default)]
pub struct UnionBuilder {
    members: IndexMap<String, Ty>,
}

impl UnionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ty: Ty) {
        self.members.entry(ty.to_string()).or_insert(ty);
    }

    /// A single member collapses to itself; anything else becomes `UnionOf`.
    pub fn finish(self) -> Ty {
        let mut members: Vec<Ty> = self.members.into_values().collect();
        if members.len() == 1 {
            members.remove(0)
        } else {
            Ty::UnionOf(members)
        }
    }
}

impl Extend<Ty> for UnionBuilder {
    fn extend<I: IntoIterator<Item = Ty>>(&mut self, iter: I) {
        for ty in iter {
            self.push(ty);
        }
    }
}
