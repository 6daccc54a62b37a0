//! Generated record types
//!
//! Records layer by composition: a [`TrackEvent`] embeds a [`PageEvent`] by
//! value, which embeds the [`User`] it was attributed to. Accessors expose
//! the flattened field set at every layer, and equality compares all of it.

use derive_more::From;
use std::fmt;

use crate::domain::{
    identifiers::{AnonymousId, EventId},
    timestamp::EventTime,
    types::{EventName, IpAddress, PagePath, PageTitle, PageUrl, UserAgent},
    user::User,
};

/// A simulated page view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEvent {
    user: User,
    event_id: EventId,
    event_time: EventTime,
    page_title: PageTitle,
    page_path: PagePath,
    page_url: PageUrl,
}

impl PageEvent {
    pub fn new(
        user: User,
        event_id: EventId,
        event_time: EventTime,
        page_title: PageTitle,
        page_path: PagePath,
        page_url: PageUrl,
    ) -> Self {
        Self {
            user,
            event_id,
            event_time,
            page_title,
            page_path,
            page_url,
        }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn anonymous_id(&self) -> AnonymousId {
        self.user.anonymous_id()
    }

    pub fn user_agent(&self) -> &UserAgent {
        self.user.user_agent()
    }

    pub fn ip(&self) -> &IpAddress {
        self.user.ip()
    }

    pub fn event_id(&self) -> EventId {
        self.event_id
    }

    pub fn event_time(&self) -> EventTime {
        self.event_time
    }

    pub fn page_title(&self) -> &PageTitle {
        &self.page_title
    }

    pub fn page_path(&self) -> &PagePath {
        &self.page_path
    }

    pub fn page_url(&self) -> &PageUrl {
        &self.page_url
    }

    fn write_fields(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let user_agent: &str = self.user_agent().as_ref();
        let page_title: &str = self.page_title.as_ref();
        write!(
            f,
            "anonymous_id={} user_agent={:?} ip={} event_id={} event_time={} page_title={:?} page_path={} page_url={}",
            self.anonymous_id(),
            user_agent,
            self.ip(),
            self.event_id,
            self.event_time.to_rfc3339(),
            page_title,
            self.page_path,
            self.page_url,
        )
    }
}

impl fmt::Display for PageEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PageEvent ")?;
        self.write_fields(f)
    }
}

/// A page view augmented with a named custom action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEvent {
    page: PageEvent,
    event_name: EventName,
}

impl TrackEvent {
    pub fn new(page: PageEvent, event_name: EventName) -> Self {
        Self { page, event_name }
    }

    /// The page-view part of this event
    pub fn page(&self) -> &PageEvent {
        &self.page
    }

    pub fn user(&self) -> &User {
        self.page.user()
    }

    pub fn anonymous_id(&self) -> AnonymousId {
        self.page.anonymous_id()
    }

    pub fn user_agent(&self) -> &UserAgent {
        self.page.user_agent()
    }

    pub fn ip(&self) -> &IpAddress {
        self.page.ip()
    }

    pub fn event_id(&self) -> EventId {
        self.page.event_id()
    }

    pub fn event_time(&self) -> EventTime {
        self.page.event_time()
    }

    pub fn page_title(&self) -> &PageTitle {
        self.page.page_title()
    }

    pub fn page_path(&self) -> &PagePath {
        self.page.page_path()
    }

    pub fn page_url(&self) -> &PageUrl {
        self.page.page_url()
    }

    pub fn event_name(&self) -> &EventName {
        &self.event_name
    }
}

impl fmt::Display for TrackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let event_name: &str = self.event_name.as_ref();
        f.write_str("TrackEvent ")?;
        self.page.write_fields(f)?;
        write!(f, " event_name={event_name:?}")
    }
}

/// One unit of output handed to an event sink
#[derive(Debug, Clone, PartialEq, Eq, From)]
pub enum Record {
    Page(PageEvent),
    Track(TrackEvent),
}

impl Record {
    pub fn event_id(&self) -> EventId {
        match self {
            Record::Page(page) => page.event_id(),
            Record::Track(track) => track.event_id(),
        }
    }

    pub fn user(&self) -> &User {
        match self {
            Record::Page(page) => page.user(),
            Record::Track(track) => track.user(),
        }
    }

    pub fn page_url(&self) -> &PageUrl {
        match self {
            Record::Page(page) => page.page_url(),
            Record::Track(track) => track.page_url(),
        }
    }

    pub fn as_track(&self) -> Option<&TrackEvent> {
        match self {
            Record::Track(track) => Some(track),
            Record::Page(_) => None,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Record::Page(page) => fmt::Display::fmt(page, f),
            Record::Track(track) => fmt::Display::fmt(track, f),
        }
    }
}
