//! Shadow frame and stack behavior

use tokensieve::{ActiveFilter, ContextFrame, FrameKind, FrameStack, TokenKind};

#[test]
fn object_frames_replay_start_then_pending_name() {
    let mut frame = ContextFrame::object(Some(ActiveFilter::IncludeAll), false);
    assert!(!frame.start_handled());

    frame.set_property_name("key");
    assert_eq!(frame.current_name(), Some("key"));

    assert_eq!(frame.next_token_to_read(), Some(TokenKind::StartObject));
    assert!(frame.start_handled());
    assert_eq!(frame.next_token_to_read(), Some(TokenKind::PropertyName));
    assert_eq!(frame.next_token_to_read(), None);
}

#[test]
fn a_new_property_name_replaces_the_pending_one() {
    let mut frame = ContextFrame::object(Some(ActiveFilter::IncludeAll), false);
    frame.set_property_name("dropped");
    frame.set_property_name("kept");

    assert_eq!(frame.next_token_to_read(), Some(TokenKind::StartObject));
    assert_eq!(frame.next_token_to_read(), Some(TokenKind::PropertyName));
    assert_eq!(frame.current_name(), Some("kept"));
    assert_eq!(frame.next_token_to_read(), None);
}

#[test]
fn array_frames_never_replay_names() {
    let mut frame = ContextFrame::array(None, false);
    assert_eq!(frame.next_token_to_read(), Some(TokenKind::StartArray));
    assert_eq!(frame.next_token_to_read(), None);
}

#[test]
fn check_value_advances_the_element_index() {
    let mut frame = ContextFrame::array(None, true);
    assert!(!frame.has_current_index());

    frame.check_value(&ActiveFilter::IncludeAll);
    assert_eq!(frame.current_index(), Some(0));
    frame.check_value(&ActiveFilter::IncludeAll);
    assert_eq!(frame.current_index(), Some(1));
}

#[test]
fn object_check_value_is_a_pass_through() {
    let mut frame = ContextFrame::object(None, true);
    let refined = frame.check_value(&ActiveFilter::IncludeAll);
    assert!(matches!(refined, Some(ActiveFilter::IncludeAll)));
    assert!(!frame.has_current_index());
}

#[test]
fn stack_mirrors_container_nesting() {
    let mut stack = FrameStack::new(Some(ActiveFilter::IncludeAll));
    assert_eq!(stack.depth(), 0);
    assert_eq!(stack.head().kind(), FrameKind::Root);
    assert!(stack.parent_of(0).is_none());

    stack.push_object(None, true);
    stack.push_array(None, false);
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.head_index(), 2);
    assert!(stack.head().in_array());
    assert_eq!(stack.parent_of(2).map(ContextFrame::kind), Some(FrameKind::Object));

    stack.pop();
    stack.pop();
    assert_eq!(stack.depth(), 0);

    // the root frame is never released
    stack.pop();
    assert_eq!(stack.head().kind(), FrameKind::Root);
}
