use serde::Deserialize;

use crate::error::Error;

use super::{FlatTree, Nodes};

#[derive(Deserialize)]
#[serde(transparent)]
pub(super) struct Unchecked<T> {
    nodes: Nodes<T>,
}

impl<T> TryFrom<Unchecked<T>> for FlatTree<T> {
    type Error = Error;

    fn try_from(Unchecked { nodes }: Unchecked<T>) -> Result<Self, Self::Error> {
        if nodes
            .first()
            .is_some_and(|root| root.parent() != FlatTree::<T>::ROOT_PARENT)
        {
            return Err(Error::InvalidRoot);
        }

        let parents_precede: bool = nodes
            .iter()
            .enumerate()
            .skip(1)
            .all(|(index, raw_node)| raw_node.parent() < index);

        parents_precede
            .then(|| FlatTree::from_nodes(nodes))
            .ok_or(Error::MaybeCyclic)
    }
}
