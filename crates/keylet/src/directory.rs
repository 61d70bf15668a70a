//! Page addressing for unbounded directories.
//!
//! A directory's first page lives at the root key itself; every later page
//! is a hash of (root, page index). Any node can compute any page key without
//! reading earlier pages.

use keylet_types::Uint256;

use crate::indexes::index;
use crate::space::LedgerSpace;

/// Key of page `page` of the directory rooted at `root`.
pub fn dir_node_index(root: &Uint256, page: u64) -> Uint256 {
    if page == 0 {
        return *root;
    }
    index(LedgerSpace::DirNode, &[root, &page])
}

/// Every page key of one directory, paired with its page index, starting at
/// the root.
pub fn directory_chain(root: Uint256) -> impl Iterator<Item = (u64, Uint256)> {
    (0u64..).map(move |page| (page, dir_node_index(&root, page)))
}
