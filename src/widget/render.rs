//! Render tree for the counter.
//!
//! `render` is a pure function of [`CounterState`]. The iced view is built from
//! the same tree, and tests query it by [`TestId`] without a running window.

use std::{fmt, str::FromStr};

use super::{error::TestIdError, message::Message, state::CounterState};

/// Stable identifiers for every addressable node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TestId {
    ComponentApp,
    CounterDisplay,
    IncrementButton,
    DecrementButton,
    ErrorMsg,
}

impl TestId {
    pub const ALL: [TestId; 5] = [
        TestId::ComponentApp,
        TestId::CounterDisplay,
        TestId::IncrementButton,
        TestId::DecrementButton,
        TestId::ErrorMsg,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            TestId::ComponentApp => "component-app",
            TestId::CounterDisplay => "counter-display",
            TestId::IncrementButton => "increment-button",
            TestId::DecrementButton => "decrement-button",
            TestId::ErrorMsg => "error-msg",
        }
    }
}

impl fmt::Display for TestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TestId {
    type Err = TestIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TestId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| TestIdError(s.to_string()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodeKind {
    Container,
    Heading,
    Button(Message),
    ErrorText,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Node {
    pub id: TestId,
    pub kind: NodeKind,
    pub text: String,
    pub children: Vec<Node>,
}

impl Node {
    fn leaf(id: TestId, kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            text: text.into(),
            children: Vec::new(),
        }
    }

    /// Whether the node carries the alert colour.
    pub fn is_alert(&self) -> bool {
        matches!(self.kind, NodeKind::ErrorText)
    }

    fn collect<'a>(&'a self, id: TestId, out: &mut Vec<&'a Node>) {
        if self.id == id {
            out.push(self);
        }
        for child in &self.children {
            child.collect(id, out);
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    root: Node,
}

impl Rendered {
    pub fn root(&self) -> &Node {
        &self.root
    }

    pub fn into_root(self) -> Node {
        self.root
    }

    /// All nodes tagged `id`, in document order.
    pub fn find(&self, id: TestId) -> Vec<&Node> {
        let mut found = Vec::new();
        self.root.collect(id, &mut found);
        found
    }

    /// The node tagged `id` if exactly one exists.
    pub fn find_one(&self, id: TestId) -> Option<&Node> {
        match self.find(id).as_slice() {
            [node] => Some(*node),
            _ => None,
        }
    }

    /// The message emitted by activating the button tagged `id`.
    pub fn click(&self, id: TestId) -> Option<Message> {
        match self.find_one(id)?.kind {
            NodeKind::Button(message) => Some(message),
            _ => None,
        }
    }
}

pub fn render(state: &CounterState) -> Rendered {
    let mut children = vec![
        Node::leaf(
            TestId::CounterDisplay,
            NodeKind::Heading,
            format!("The counter is currently {}", state.counter),
        ),
        Node::leaf(
            TestId::IncrementButton,
            NodeKind::Button(Message::Increment),
            "Increment counter",
        ),
        Node::leaf(
            TestId::DecrementButton,
            NodeKind::Button(Message::Decrement),
            "Decrement counter",
        ),
    ];

    if let Some(error) = state.error {
        children.push(Node::leaf(
            TestId::ErrorMsg,
            NodeKind::ErrorText,
            error.to_string(),
        ));
    }

    Rendered {
        root: Node {
            id: TestId::ComponentApp,
            kind: NodeKind::Container,
            text: String::new(),
            children,
        },
    }
}
