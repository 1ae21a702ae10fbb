//! Tree traversal and element lookup.
//!
//! The locator walks a rooted component tree in pre-order (parent before
//! children, children in declaration order) and returns the first component
//! that both conforms to a capability [`Shape`] and satisfies a caller
//! predicate. Conformance is checked first; the predicate only ever runs on
//! conforming candidates, so predicate bodies can rely on shape-specific
//! attributes.
//!
//! "Nothing matched" is an empty result, not an error: locating an absent
//! element is a normal outcome that callers silently ignore.
//!
//! # Shapes
//!
//! A [`Shape`] projects `&dyn Component` onto a typed capability view.
//! Tuples of shapes express conjunctions:
//!
//! ```
//! use horizon_probe::widget::locator::{find_element, shape};
//! use horizon_probe::widget::widgets::{Panel, PushButton};
//! use horizon_probe::widget::{ComponentRef, Pressable, Titled};
//!
//! let root = Panel::new();
//! root.add_child(PushButton::new("Save")).unwrap();
//!
//! let root: ComponentRef = root;
//! let found = find_element::<(shape::Titled, shape::Pressable), _>(
//!     &root,
//!     |(titled, _): (&dyn Titled, &dyn Pressable)| {
//!         titled.title().as_deref() == Some("Save")
//!     },
//! );
//! assert!(found.is_some());
//! ```

use std::marker::PhantomData;

use super::traits::{Component, ComponentRef};

/// A capability shape: a projection from a component onto the typed view a
/// predicate runs against.
///
/// Implemented by the marker types in [`shape`], by tuples of shapes
/// (conjunction), and extendable by downstream code for custom capabilities.
pub trait Shape {
    /// The typed view a conforming component projects to.
    type View<'a>;

    /// Project a component onto this shape's view, or `None` if the
    /// component does not conform.
    fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>>;
}

/// Marker types projecting components onto capability views.
pub mod shape {
    use super::{Component, PhantomData, Shape};
    use crate::widget::traits;

    /// Conforms if the component has a displayed title.
    pub struct Titled;

    impl Shape for Titled {
        type View<'a> = &'a dyn traits::Titled;

        fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
            component.as_titled()
        }
    }

    /// Conforms if the component has placeholder text.
    pub struct Placeholdered;

    impl Shape for Placeholdered {
        type View<'a> = &'a dyn traits::Placeholdered;

        fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
            component.as_placeholdered()
        }
    }

    /// Conforms if the component has a mutable text value.
    pub struct Editable;

    impl Shape for Editable {
        type View<'a> = &'a dyn traits::TextEditable;

        fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
            component.as_text_editable()
        }
    }

    /// Conforms if the component carries an accessibility label surface.
    pub struct Accessible;

    impl Shape for Accessible {
        type View<'a> = &'a dyn traits::Accessible;

        fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
            component.as_accessible()
        }
    }

    /// Conforms if the component can receive a simulated press.
    pub struct Pressable;

    impl Shape for Pressable {
        type View<'a> = &'a dyn traits::Pressable;

        fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
            component.as_pressable()
        }
    }

    /// Conforms if the component owns selectable cells.
    pub struct CellContainer;

    impl Shape for CellContainer {
        type View<'a> = &'a dyn traits::CellContainer;

        fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
            component.as_cell_container()
        }
    }

    /// Conforms if the component is the concrete widget type `T`.
    pub struct OfType<T>(PhantomData<T>);

    impl<T: Component + 'static> Shape for OfType<T> {
        type View<'a> = &'a T;

        fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
            component.as_any().downcast_ref::<T>()
        }
    }
}

/// Conjunction of two shapes: conforms only if both project.
impl<A: Shape, B: Shape> Shape for (A, B) {
    type View<'a> = (A::View<'a>, B::View<'a>);

    fn project<'a>(component: &'a dyn Component) -> Option<Self::View<'a>> {
        Some((A::project(component)?, B::project(component)?))
    }
}

/// Find the first component in pre-order that conforms to `S` and satisfies
/// `predicate`.
///
/// The search set is `root` itself plus every descendant. Ties among
/// multiple matches are broken by traversal order: earliest declared wins.
/// Returns `None` for an empty tree, no conforming node, or no match;
/// absence is never an error.
///
/// The query never mutates the tree, and repeated calls without tree
/// mutation return the same element.
pub fn find_element<S, P>(root: &ComponentRef, predicate: P) -> Option<ComponentRef>
where
    S: Shape,
    P: for<'a> Fn(S::View<'a>) -> bool,
{
    let found = first_match(root, &|candidate| {
        S::project(candidate).map(|view| predicate(view))
    });
    tracing::trace!(
        target: horizon_probe_core::logging::targets::LOCATOR,
        root = %root.base().id(),
        found = found.as_ref().map(|c| c.base().id().as_u64()),
        "find_element"
    );
    found
}

/// Find the first candidate in `candidates` (in slice order) that conforms
/// to `S` and satisfies `predicate`.
///
/// Used where only an explicit candidate set is meaningful, e.g. the
/// currently materialized cells of a scrolling container. The candidates'
/// own subtrees are not searched.
pub fn find_element_in<S, P>(candidates: &[ComponentRef], predicate: P) -> Option<ComponentRef>
where
    S: Shape,
    P: for<'a> Fn(S::View<'a>) -> bool,
{
    candidates
        .iter()
        .find(|candidate| {
            S::project(candidate.as_ref())
                .map(|view| predicate(view))
                .unwrap_or(false)
        })
        .cloned()
}

/// Pre-order walk with early exit. `probe` returns `None` for a
/// non-conforming candidate (skipped without consulting the predicate).
fn first_match(
    candidate: &ComponentRef,
    probe: &dyn Fn(&dyn Component) -> Option<bool>,
) -> Option<ComponentRef> {
    if probe(candidate.as_ref()) == Some(true) {
        return Some(candidate.clone());
    }
    for child in candidate.children() {
        if let Some(found) = first_match(&child, probe) {
            return Some(found);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widget::traits::{Pressable as PressableCap, Titled as TitledCap};
    use crate::widget::widgets::{Label, Panel, PushButton};

    #[test]
    fn test_first_match_in_preorder() {
        let root = Panel::new();
        let first = PushButton::new("Fixture Title");
        let second = PushButton::new("Fixture Title");
        root.add_child(first.clone()).unwrap();
        root.add_child(second.clone()).unwrap();

        let root: ComponentRef = root;
        let found = find_element::<shape::Titled, _>(&root, |titled: &dyn TitledCap| {
            titled.title().as_deref() == Some("Fixture Title")
        })
        .unwrap();
        assert_eq!(found.base().id(), first.base().id());
    }

    #[test]
    fn test_parent_is_visited_before_children() {
        let root = Panel::new();
        let outer = Label::new("Fixture Text");
        let inner = Label::new("Fixture Text");
        outer.base().add_child(inner.clone()).unwrap();
        root.add_child(outer.clone()).unwrap();

        let root: ComponentRef = root;
        let found = find_element::<shape::Titled, _>(&root, |titled: &dyn TitledCap| {
            titled.title().is_some()
        })
        .unwrap();
        assert_eq!(found.base().id(), outer.base().id());
    }

    #[test]
    fn test_nonconforming_candidates_are_skipped() {
        let root = Panel::new();
        root.add_child(Panel::new()).unwrap();
        root.add_child(Label::new("Fixture Text")).unwrap();

        // The predicate only ever runs on Titled components, so unwrapping
        // the title here is safe.
        let root: ComponentRef = root;
        let found = find_element::<shape::Titled, _>(&root, |titled: &dyn TitledCap| {
            titled.title().expect("conforming candidates have a title") == "Fixture Text"
        });
        assert!(found.is_some());
    }

    #[test]
    fn test_not_found_is_none() {
        let root: ComponentRef = Panel::new();
        assert!(find_element::<shape::Titled, _>(&root, |_: &dyn TitledCap| true).is_none());
    }

    #[test]
    fn test_conjunction_requires_both_shapes() {
        let root = Panel::new();
        // A label is titled but not pressable.
        root.add_child(Label::new("Fixture Text")).unwrap();

        let root: ComponentRef = root;
        let found = find_element::<(shape::Titled, shape::Pressable), _>(
            &root,
            |(_, _): (&dyn TitledCap, &dyn PressableCap)| true,
        );
        assert!(found.is_none());
    }

    #[test]
    fn test_of_type_projects_concrete_widgets() {
        let root = Panel::new();
        root.add_child(Label::new("Fixture Text")).unwrap();
        let button = PushButton::new("Fixture Title");
        root.add_child(button.clone()).unwrap();

        let root: ComponentRef = root;
        let found = find_element::<shape::OfType<PushButton>, _>(&root, |b: &PushButton| {
            b.title().as_deref() == Some("Fixture Title")
        })
        .unwrap();
        assert_eq!(found.base().id(), button.base().id());
    }

    #[test]
    fn test_restricted_candidate_set() {
        let a = Label::new("Fixture Text 1");
        let b = Label::new("Fixture Text 2");
        let candidates: Vec<ComponentRef> = vec![a.clone(), b.clone()];

        let found = find_element_in::<shape::Titled, _>(&candidates, |titled: &dyn TitledCap| {
            titled.title().as_deref() == Some("Fixture Text 2")
        })
        .unwrap();
        assert_eq!(found.base().id(), b.base().id());
    }
}
