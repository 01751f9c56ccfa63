/* src/base/chain.rs */

use std::error::Error as StdError;

/// Iterator over an error and every error in its `source()` chain.
pub struct Chain<'a> {
	next: Option<&'a (dyn StdError + 'static)>,
}

/// Walks `error` followed by each of its transitive sources.
pub fn chain<'a>(error: &'a (dyn StdError + 'static)) -> Chain<'a> {
	Chain { next: Some(error) }
}

impl<'a> Iterator for Chain<'a> {
	type Item = &'a (dyn StdError + 'static);

	fn next(&mut self) -> Option<Self::Item> {
		let current = self.next?;
		self.next = current.source();
		Some(current)
	}
}

/// Display text of every error below `error` in its chain, outermost first.
pub fn cause_texts(error: &(dyn StdError + 'static)) -> Vec<String> {
	chain(error).skip(1).map(|e| e.to_string()).collect()
}
