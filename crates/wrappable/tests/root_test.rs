mod test_utils;

use std::fmt;
use std::sync::OnceLock;

use test_utils::{CLOSED_PIPE, EOF, SHORT_BUFFER, STR, UNEXPECTED_EOF, init_tracing};
use wrappable::{
    Capability, ErrorNode, ErrorRef, Fault, Headed, Message, Unwrappable, errorf, extract, is,
    root,
};

/// Exposes a topmost error without being unwrappable.
#[derive(Debug)]
struct Annotated {
    note: String,
    top: ErrorRef,
}

impl fmt::Display for Annotated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.note, self.top)
    }
}

impl std::error::Error for Annotated {}

impl Headed for Annotated {
    fn topmost(&self) -> ErrorRef {
        self.top.clone()
    }
}

impl Fault for Annotated {
    fn as_headed(&self) -> Option<&dyn Headed> {
        Some(self)
    }
}

/// Unwraps to whatever `next` is set to, possibly itself.
struct Looping {
    name: &'static str,
    next: OnceLock<ErrorRef>,
}

impl Looping {
    fn handle(name: &'static str) -> ErrorRef {
        ErrorRef::new(Self {
            name,
            next: OnceLock::new(),
        })
    }

    fn point(from: &ErrorRef, to: &ErrorRef) {
        let looping = from.downcast_ref::<Looping>().expect("looping fault");
        looping.next.set(to.clone()).expect("next set once");
    }
}

impl fmt::Debug for Looping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Looping")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for Looping {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl std::error::Error for Looping {}

impl Unwrappable for Looping {
    fn unwrap_once(&self) -> Option<ErrorRef> {
        self.next.get().cloned()
    }
}

impl Fault for Looping {
    fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
        Some(self)
    }
}

/// Unwraps to a newly allocated step each time, down to step 0.
#[derive(Debug)]
struct Countdown(u32);

impl fmt::Display for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "step {}", self.0)
    }
}

impl std::error::Error for Countdown {}

impl Unwrappable for Countdown {
    fn unwrap_once(&self) -> Option<ErrorRef> {
        self.0.checked_sub(1).map(|n| ErrorRef::new(Countdown(n)))
    }
}

impl Fault for Countdown {
    fn as_unwrappable(&self) -> Option<&dyn Unwrappable> {
        Some(self)
    }
}

#[test]
fn root_is_the_last_error_wrapped() {
    init_tracing();
    let e3 = ErrorNode::new(STR)
        .wrap(&*UNEXPECTED_EOF)
        .wrap(&*EOF)
        .wrap(&*SHORT_BUFFER);

    assert_eq!(e3.root(), *SHORT_BUFFER);
    assert_eq!(root(&ErrorRef::new(e3)), *SHORT_BUFFER);
}

#[test]
fn root_of_the_documented_chain() {
    let chain = ErrorNode::new("err1").wrap(&*EOF);
    assert_eq!(chain.root(), *EOF);
    assert_eq!(root(&ErrorRef::new(chain)), *EOF);
}

#[test]
fn root_follows_formatted_errors() {
    let inner = errorf!(wraps: CLOSED_PIPE.clone(), "flush: {}", *CLOSED_PIPE);
    let outer = errorf!(wraps: inner.clone(), "close: {}", inner);
    assert_eq!(root(&outer), *CLOSED_PIPE);

    let chain = ErrorNode::new(STR).wrap(&outer);
    assert_eq!(chain.root(), *CLOSED_PIPE);
    assert_eq!(root(&ErrorRef::new(chain)), *CLOSED_PIPE);
}

#[test]
fn leaf_is_its_own_root() {
    assert_eq!(root(&EOF), *EOF);
    assert_eq!(ErrorNode::from_error(EOF.clone()).root(), *EOF);

    let plain = errorf!("no cause");
    assert_eq!(root(&plain), plain);
}

#[test]
fn nested_nodes_contribute_their_head() {
    let inner = ErrorRef::new(ErrorNode::from_error(EOF.clone()).wrap(&*CLOSED_PIPE));
    let outer = ErrorNode::from_error(inner);

    assert_eq!(outer.root(), *CLOSED_PIPE);
    assert_eq!(root(&ErrorRef::new(outer)), *CLOSED_PIPE);
}

#[test]
fn package_root_hands_over_to_the_first_root_aware_cause() {
    let node = ErrorRef::new(ErrorNode::new("inner").wrap(&*SHORT_BUFFER));
    let outer = errorf!(wraps: node.clone(), "outer: {}", node);

    assert_eq!(root(&outer), *SHORT_BUFFER);
}

#[test]
fn node_root_and_package_root_can_disagree() {
    init_tracing();
    let top = ErrorRef::msg("top");
    let annotated = ErrorRef::new(Annotated {
        note: "annotated".to_string(),
        top: top.clone(),
    });
    let formatted = errorf!(wraps: annotated.clone(), "context: {}", annotated);

    // the package walk stops at the last value it reaches
    assert_eq!(root(&formatted), annotated);

    // the node walk keeps the topmost error of headed values
    let node = ErrorNode::from_error(formatted);
    assert_eq!(node.root(), top);
    assert_eq!(root(&ErrorRef::new(node)), top);
}

#[test]
fn cyclic_unwraps_terminate() {
    init_tracing();
    let a = Looping::handle("a");
    let b = Looping::handle("b");
    Looping::point(&a, &b);
    Looping::point(&b, &a);

    assert_eq!(root(&a), b);
    assert!(is(&a, &b));
    assert!(!is(&a, &*EOF));

    let mut message: Option<Message> = None;
    assert!(!extract(&a, &mut message));

    let chain = ErrorNode::new(STR).wrap(&a);
    assert_eq!(chain.root(), b);
    assert!(chain.is(&a));
    assert!(!chain.is(&EOF));
}

#[test]
fn self_loop_terminates() {
    let a = Looping::handle("self");
    Looping::point(&a, &a);

    assert_eq!(root(&a), a);
    assert!(!is(&a, &*EOF));
}

#[test]
fn fresh_unwraps_are_followed_to_the_end() {
    init_tracing();
    let start = ErrorRef::new(Countdown(64));

    assert_eq!(root(&start).to_string(), "step 0");
    assert_eq!(ErrorNode::from_error(start.clone()).root().to_string(), "step 0");

    let mut last_step = Capability::new(|f| f.to_string() == "step 0");
    assert!(extract(&start, &mut last_step));
    assert_eq!(last_step.found().map(ToString::to_string).as_deref(), Some("step 0"));

    assert!(!is(&start, &*EOF));
    let chain = ErrorNode::new(STR).wrap(&start);
    assert_eq!(chain.root().to_string(), "step 0");
    assert!(chain.is(&start));
}

#[test]
fn appending_past_a_looping_cause_terminates() {
    let looping = Looping::handle("loop");
    Looping::point(&looping, &looping);

    let chain = ErrorNode::new("x").wrap(&looping);
    assert_eq!(chain.root(), looping);

    let next = ErrorRef::msg("next");
    let chain = chain.wrap(&next);
    assert_eq!(chain.to_string(), "x: loop: loop: next");
    assert!(chain.is(&next));
    assert!(chain.is(&looping));
    assert_eq!(chain.root(), next);

    let last = ErrorRef::msg("last");
    let chain = chain.wrap(&last);
    assert!(chain.is(&last));
    assert_eq!(chain.root(), last);
}
