use crate::markdown::toc::parser::Heading;
use crate::toc::TocNode;

/// Fold headings, in document order, into a tree by level.
///
/// A heading becomes a child of the nearest preceding heading with a lower
/// level, or a top-level node when there is none.
pub fn build_toc(headings: &[Heading]) -> Vec<TocNode> {
    let mut roots = Vec::new();
    let mut stack: Vec<(u8, TocNode)> = Vec::new();

    for heading in headings {
        while stack.last().is_some_and(|(level, _)| *level >= heading.level) {
            if let Some((_, done)) = stack.pop() {
                attach(&mut stack, &mut roots, done);
            }
        }

        stack.push((heading.level, TocNode::new(heading.id.clone(), heading.label.clone())));
    }

    while let Some((_, done)) = stack.pop() {
        attach(&mut stack, &mut roots, done);
    }

    roots
}

fn attach(stack: &mut [(u8, TocNode)], roots: &mut Vec<TocNode>, node: TocNode) {
    match stack.last_mut() {
        Some((_, parent)) => parent.children.push(node),
        None => roots.push(node),
    }
}
