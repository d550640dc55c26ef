//! In-page anchor scrolling.
//!
//! Browsers run the bundled `anchor.js`, which scrolls the element of the
//! content container whose id matches the URL fragment into view. This
//! module holds the build-time side: [`AnchorTargets`] collects ids from
//! rendered HTML and [`dangling_fragments`] reports in-page links whose
//! target does not exist.
//!
//! [`NavigationEvents`], [`Subscription`] and [`AnchorScroller`] mirror the
//! script's listener lifecycle so it can be exercised without a browser.
//! The build never mounts a scroller; generated pages rely on `anchor.js`.

use std::borrow::Cow;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::rc::{Rc, Weak};

use percent_encoding::percent_decode_str;

use crate::html::TrustedHtml;

/// Browser script implementing anchor scrolling on generated pages.
pub const SCRIPT: &str = include_str!("../assets/anchor.js");

/// Element id of the container holding rendered page content.
pub const CONTENT_ID: &str = "wiki-content";

/// How the viewport moves to a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

/// Something that can bring an element into view, aligned to the top.
pub trait Viewport {
    fn scroll_into_view(&self, id: &str, behavior: ScrollBehavior);
}

/// Element ids present in a piece of rendered content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnchorTargets {
    ids: BTreeSet<String>,
}

impl AnchorTargets {
    /// Collects every `id="..."` attribute value in the HTML.
    pub fn from_html(html: &TrustedHtml) -> Self {
        Self {
            ids: attribute_values(html.as_str(), "id")
                .into_iter()
                .filter(|id| !id.is_empty())
                .collect(),
        }
    }

    /// Finds the element named by a URL fragment, with or without the `#`.
    ///
    /// Percent escapes are decoded; a malformed escape is matched literally.
    pub fn locate(&self, fragment: &str) -> Option<&str> {
        let id = fragment_id(fragment.strip_prefix('#').unwrap_or(fragment));
        if id.is_empty() {
            return None;
        }
        self.ids.get(id.as_ref()).map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Same-page fragment links (`href="#..."`) whose target id is missing.
pub fn dangling_fragments(html: &TrustedHtml) -> Vec<String> {
    let targets = AnchorTargets::from_html(html);
    attribute_values(html.as_str(), "href")
        .into_iter()
        .filter_map(|href| href.strip_prefix('#').map(|id| fragment_id(id).into_owned()))
        .filter(|id| !id.is_empty() && !targets.contains(id))
        .collect()
}

/// Decodes a percent-encoded fragment, keeping it as written if it does
/// not decode to UTF-8.
fn fragment_id(raw: &str) -> Cow<'_, str> {
    percent_decode_str(raw)
        .decode_utf8()
        .unwrap_or(Cow::Borrowed(raw))
}

fn attribute_values(html: &str, name: &str) -> Vec<String> {
    let needle = format!(" {name}=\"");
    let mut values = Vec::new();
    let mut rest = html;

    while let Some(pos) = rest.find(&needle) {
        let start = pos + needle.len();
        let Some(len) = rest[start..].find('"') else {
            break;
        };
        values.push(rest[start..start + len].to_string());
        rest = &rest[start + len..];
    }

    values
}

type Listener = Rc<dyn Fn(&str)>;

#[derive(Default)]
struct Registry {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener)>>,
}

/// Hash-change notifications for one page.
///
/// Single threaded. Listeners stay registered until their
/// [`Subscription`] is dropped.
#[derive(Clone, Default)]
pub struct NavigationEvents {
    registry: Rc<Registry>,
}

impl NavigationEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a listener called with the new fragment after each hash change.
    pub fn subscribe(&self, listener: impl Fn(&str) + 'static) -> Subscription {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        Subscription {
            id,
            registry: Rc::downgrade(&self.registry),
        }
    }

    /// Notifies every registered listener that navigation to `fragment` completed.
    pub fn hash_change_complete(&self, fragment: &str) {
        // Snapshot so listeners may subscribe or unsubscribe while running.
        let listeners: Vec<Listener> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in listeners {
            listener(fragment);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

/// Registration guard; dropping it removes the listener.
#[must_use = "dropping a subscription removes the listener immediately"]
pub struct Subscription {
    id: u64,
    registry: Weak<Registry>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(registry) = self.registry.upgrade() {
            registry
                .listeners
                .borrow_mut()
                .retain(|(id, _)| *id != self.id);
        }
    }
}

/// Scrolls to fragment targets while mounted.
///
/// Mounting handles the current fragment immediately, then follows hash
/// changes. Fragments without a matching element are ignored. Dropping the
/// scroller unregisters its listener.
pub struct AnchorScroller {
    _subscription: Subscription,
}

impl AnchorScroller {
    pub fn mount<V>(
        events: &NavigationEvents,
        targets: AnchorTargets,
        viewport: Rc<V>,
        current_fragment: Option<&str>,
    ) -> Self
    where
        V: Viewport + 'static,
    {
        let handle = move |fragment: &str| {
            if let Some(id) = targets.locate(fragment) {
                viewport.scroll_into_view(id, ScrollBehavior::Smooth);
            }
        };

        if let Some(fragment) = current_fragment {
            handle(fragment);
        }

        Self {
            _subscription: events.subscribe(handle),
        }
    }
}
