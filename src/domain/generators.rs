//! Page-view and tracked-event generators
//!
//! Each generator draws its own fixed list of candidate URLs when it is
//! built. Every generated event copies the identity of one pooled user and
//! picks its page URL uniformly from that list.

use crate::domain::{
    config_types::UrlCount,
    events::{PageEvent, TrackEvent},
    identifiers::EventId,
    provider::{FakeDataProvider, ProviderError},
    timestamp::EventTime,
    types::{EventName, PagePath, PageTitle, PageUrl},
    user_pool::UserPool,
};
use crate::error::{Error, Result};

/// Words per tracked event name
const EVENT_NAME_WORDS: usize = 2;

/// Produces one [`PageEvent`] per call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageEventGenerator {
    urls: Vec<PageUrl>,
}

impl PageEventGenerator {
    /// Builds a generator with `url_count` freshly drawn https URLs
    pub fn new<P>(url_count: UrlCount, provider: &mut P) -> Result<Self>
    where
        P: FakeDataProvider + ?Sized,
    {
        let urls = (0..url_count.into_inner())
            .map(|_| {
                PageUrl::try_new(provider.https_url()?)
                    .map_err(|e| ProviderError::invalid_value("page_url", e))
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(Self::with_urls(urls))
    }

    /// Builds a generator over a known candidate list
    pub fn with_urls(urls: Vec<PageUrl>) -> Self {
        Self { urls }
    }

    pub fn candidate_urls(&self) -> &[PageUrl] {
        &self.urls
    }

    /// Generates a page view for the next pooled user
    ///
    /// The user is drawn first, so an empty pool fails before any
    /// randomness is consumed.
    pub fn generate<P>(&self, pool: &mut UserPool, provider: &mut P) -> Result<PageEvent>
    where
        P: FakeDataProvider + ?Sized,
    {
        let (page, ()) = self.draw(pool, provider, |_| Ok(()))?;
        Ok(page)
    }

    /// Draws a page view, running `extra` right after the event time
    ///
    /// Draw order is user, event id, event time, `extra`, title, path, URL.
    fn draw<P, T>(
        &self,
        pool: &mut UserPool,
        provider: &mut P,
        extra: impl FnOnce(&mut P) -> Result<T>,
    ) -> Result<(PageEvent, T)>
    where
        P: FakeDataProvider + ?Sized,
    {
        let user = pool.next_user()?;
        let event_id = EventId::new(provider.uuid()?);
        let event_time = EventTime::new(provider.date_time_this_year()?);
        let extra = extra(provider)?;
        let page_title = PageTitle::try_new(provider.sentence()?)
            .map_err(|e| ProviderError::invalid_value("page_title", e))?;
        let page_path = PagePath::try_new(provider.uri_path()?)
            .map_err(|e| ProviderError::invalid_value("page_path", e))?;
        let page_url = self.choose_url(provider)?;

        let page = PageEvent::new(user, event_id, event_time, page_title, page_path, page_url);
        Ok((page, extra))
    }

    fn choose_url<P>(&self, provider: &mut P) -> Result<PageUrl>
    where
        P: FakeDataProvider + ?Sized,
    {
        if self.urls.is_empty() {
            return Err(Error::EmptyChoiceSet { field: "page_url" });
        }

        let index = provider.choose_index(self.urls.len())?;
        self.urls.get(index).cloned().ok_or_else(|| {
            ProviderError::invalid_value(
                "page_url index",
                format!("{index} is out of range for {} candidates", self.urls.len()),
            )
            .into()
        })
    }
}

/// Produces one [`TrackEvent`] per call
///
/// Wraps its own [`PageEventGenerator`], so its candidate URLs are
/// independent of any page generator built alongside it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackEventGenerator {
    pages: PageEventGenerator,
}

impl TrackEventGenerator {
    pub fn new<P>(url_count: UrlCount, provider: &mut P) -> Result<Self>
    where
        P: FakeDataProvider + ?Sized,
    {
        Ok(Self {
            pages: PageEventGenerator::new(url_count, provider)?,
        })
    }

    pub fn with_urls(urls: Vec<PageUrl>) -> Self {
        Self {
            pages: PageEventGenerator::with_urls(urls),
        }
    }

    pub fn candidate_urls(&self) -> &[PageUrl] {
        self.pages.candidate_urls()
    }

    /// Generates a page view for the next pooled user and names it with two random words
    pub fn generate<P>(&self, pool: &mut UserPool, provider: &mut P) -> Result<TrackEvent>
    where
        P: FakeDataProvider + ?Sized,
    {
        let (page, event_name) = self.pages.draw(pool, provider, |provider| {
            EventName::try_new(provider.words(EVENT_NAME_WORDS)?.join(" "))
                .map_err(|e| Error::from(ProviderError::invalid_value("event_name", e)))
        })?;

        Ok(TrackEvent::new(page, event_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        provider::ProviderResult,
        test_data::{ips, urls, user_agents},
        user::{user_from_parts, User},
    };
    use chrono::{DateTime, TimeZone, Utc};
    use std::collections::VecDeque;
    use uuid::Uuid;

    /// Provider replaying canned values, to pin down exactly what each field receives
    #[derive(Default)]
    struct ScriptedProvider {
        uuids: VecDeque<Uuid>,
        urls: VecDeque<String>,
        indices: VecDeque<usize>,
        words: VecDeque<Vec<String>>,
        sentence: String,
        uri_path: String,
        calls: usize,
        trace: Vec<&'static str>,
    }

    impl ScriptedProvider {
        fn new() -> Self {
            Self {
                sentence: "Lorem ipsum dolor.".to_string(),
                uri_path: "main/list".to_string(),
                ..Self::default()
            }
        }

        fn time() -> DateTime<Utc> {
            Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap()
        }
    }

    impl FakeDataProvider for ScriptedProvider {
        fn uuid(&mut self) -> ProviderResult<Uuid> {
            self.calls += 1;
            self.trace.push("uuid");
            self.uuids
                .pop_front()
                .ok_or_else(|| ProviderError::unavailable("uuid", "script exhausted"))
        }

        fn user_agent(&mut self) -> ProviderResult<String> {
            self.calls += 1;
            self.trace.push("user_agent");
            Ok(user_agents::FIREFOX.to_string())
        }

        fn ipv4(&mut self) -> ProviderResult<String> {
            self.calls += 1;
            self.trace.push("ipv4");
            Ok(ips::PRIVATE_1.to_string())
        }

        fn https_url(&mut self) -> ProviderResult<String> {
            self.calls += 1;
            self.trace.push("https_url");
            self.urls
                .pop_front()
                .ok_or_else(|| ProviderError::unavailable("https_url", "script exhausted"))
        }

        fn sentence(&mut self) -> ProviderResult<String> {
            self.calls += 1;
            self.trace.push("sentence");
            Ok(self.sentence.clone())
        }

        fn uri_path(&mut self) -> ProviderResult<String> {
            self.calls += 1;
            self.trace.push("uri_path");
            Ok(self.uri_path.clone())
        }

        fn date_time_this_year(&mut self) -> ProviderResult<DateTime<Utc>> {
            self.calls += 1;
            self.trace.push("date_time_this_year");
            Ok(Self::time())
        }

        fn words(&mut self, count: usize) -> ProviderResult<Vec<String>> {
            self.calls += 1;
            self.trace.push("words");
            let words = self
                .words
                .pop_front()
                .ok_or_else(|| ProviderError::unavailable("words", "script exhausted"))?;
            assert_eq!(words.len(), count);
            Ok(words)
        }

        fn choose_index(&mut self, len: usize) -> ProviderResult<usize> {
            self.calls += 1;
            self.trace.push("choose_index");
            assert!(len > 0);
            self.indices
                .pop_front()
                .ok_or_else(|| ProviderError::unavailable("index", "script exhausted"))
        }
    }

    fn pooled_user() -> User {
        user_from_parts([3; 16], user_agents::CHROME, ips::PRIVATE_2).unwrap()
    }

    fn url(value: &str) -> PageUrl {
        PageUrl::try_new(value.to_string()).unwrap()
    }

    #[test]
    fn new_draws_the_requested_number_of_urls() {
        let mut provider = ScriptedProvider::new();
        provider.urls.extend([urls::SHOP, urls::BLOG, urls::DOCS].map(String::from));

        let generator = PageEventGenerator::new(UrlCount::default(), &mut provider).unwrap();

        assert_eq!(
            generator.candidate_urls(),
            &[url(urls::SHOP), url(urls::BLOG), url(urls::DOCS)]
        );
    }

    #[test]
    fn non_https_url_from_provider_is_rejected() {
        let mut provider = ScriptedProvider::new();
        provider.urls.push_back("http://plain.example.com/".to_string());

        let err = PageEventGenerator::new(UrlCount::try_new(1).unwrap(), &mut provider).unwrap_err();

        assert!(matches!(
            err,
            Error::Provider(ProviderError::InvalidValue {
                field: "page_url",
                ..
            })
        ));
    }

    #[test]
    fn page_event_copies_pooled_user_and_chosen_url() {
        let user = pooled_user();
        let mut pool = UserPool::from_users([user.clone()]);
        let generator = PageEventGenerator::with_urls(vec![url(urls::SHOP), url(urls::BLOG)]);
        let mut provider = ScriptedProvider::new();
        let event_uuid = Uuid::from_u128(0x1234);
        provider.uuids.push_back(event_uuid);
        provider.indices.push_back(1);

        let page = generator.generate(&mut pool, &mut provider).unwrap();

        assert_eq!(page.user(), &user);
        assert_eq!(page.event_id(), EventId::new(event_uuid));
        assert_eq!(page.event_time().into_datetime(), ScriptedProvider::time());
        assert_eq!(page.page_title().as_ref(), "Lorem ipsum dolor.");
        assert_eq!(page.page_path().as_ref(), "main/list");
        assert_eq!(page.page_url(), &url(urls::BLOG));
    }

    #[test]
    fn empty_candidate_list_fails_with_empty_choice_set() {
        let mut pool = UserPool::from_users([pooled_user()]);
        let generator = PageEventGenerator::with_urls(Vec::new());
        let mut provider = ScriptedProvider::new();
        provider.uuids.push_back(Uuid::from_u128(1));

        let err = generator.generate(&mut pool, &mut provider).unwrap_err();

        assert!(matches!(err, Error::EmptyChoiceSet { field: "page_url" }));
    }

    #[test]
    fn empty_pool_fails_before_touching_the_provider() {
        let mut pool = UserPool::from_users(Vec::new());
        let generator = PageEventGenerator::with_urls(vec![url(urls::SHOP)]);
        let mut provider = ScriptedProvider::new();

        let err = generator.generate(&mut pool, &mut provider).unwrap_err();

        assert!(matches!(err, Error::EmptyPool));
        assert_eq!(provider.calls, 0);
    }

    #[test]
    fn provider_failure_propagates_unchanged() {
        let mut pool = UserPool::from_users([pooled_user()]);
        let generator = PageEventGenerator::with_urls(vec![url(urls::SHOP)]);
        let mut provider = ScriptedProvider::new();

        let err = generator.generate(&mut pool, &mut provider).unwrap_err();

        assert!(matches!(
            err,
            Error::Provider(ProviderError::Unavailable { field: "uuid", .. })
        ));
    }

    #[test]
    fn out_of_range_index_from_provider_is_reported() {
        let mut pool = UserPool::from_users([pooled_user()]);
        let generator = PageEventGenerator::with_urls(vec![url(urls::SHOP)]);
        let mut provider = ScriptedProvider::new();
        provider.uuids.push_back(Uuid::from_u128(1));
        provider.indices.push_back(5);

        let err = generator.generate(&mut pool, &mut provider).unwrap_err();

        assert!(matches!(
            err,
            Error::Provider(ProviderError::InvalidValue { .. })
        ));
    }

    #[test]
    fn track_event_joins_two_words_into_its_name() {
        let mut pool = UserPool::from_users([pooled_user()]);
        let generator = TrackEventGenerator::with_urls(vec![url(urls::DOCS)]);
        let mut provider = ScriptedProvider::new();
        provider.uuids.push_back(Uuid::from_u128(9));
        provider.indices.push_back(0);
        provider
            .words
            .push_back(vec!["share".to_string(), "link".to_string()]);

        let track = generator.generate(&mut pool, &mut provider).unwrap();

        assert_eq!(track.event_name().as_ref(), "share link");
        assert_eq!(track.page_url(), &url(urls::DOCS));
        assert_eq!(track.user(), &pooled_user());
    }

    #[test]
    fn track_generator_keeps_its_own_candidates() {
        let mut provider = ScriptedProvider::new();
        provider
            .urls
            .extend([urls::SHOP, urls::BLOG].map(String::from));
        let one = UrlCount::try_new(1).unwrap();

        let page = PageEventGenerator::new(one, &mut provider).unwrap();
        let track = TrackEventGenerator::new(one, &mut provider).unwrap();

        assert_eq!(page.candidate_urls(), &[url(urls::SHOP)]);
        assert_eq!(track.candidate_urls(), &[url(urls::BLOG)]);
    }

    #[test]
    fn track_generator_with_no_urls_fails_with_empty_choice_set() {
        let mut pool = UserPool::from_users([pooled_user()]);
        let generator = TrackEventGenerator::with_urls(Vec::new());
        let mut provider = ScriptedProvider::new();
        provider.uuids.push_back(Uuid::from_u128(1));
        provider
            .words
            .push_back(vec!["close".to_string(), "tab".to_string()]);

        let err = generator.generate(&mut pool, &mut provider).unwrap_err();

        assert!(matches!(err, Error::EmptyChoiceSet { .. }));
    }

    #[test]
    fn event_name_is_drawn_right_after_event_time() {
        let mut pool = UserPool::from_users([pooled_user()]);
        let generator = TrackEventGenerator::with_urls(vec![url(urls::SHOP)]);
        let mut provider = ScriptedProvider::new();
        provider.uuids.push_back(Uuid::from_u128(2));
        provider.indices.push_back(0);
        provider
            .words
            .push_back(vec!["play".to_string(), "video".to_string()]);

        generator.generate(&mut pool, &mut provider).unwrap();

        assert_eq!(
            provider.trace,
            [
                "uuid",
                "date_time_this_year",
                "words",
                "sentence",
                "uri_path",
                "choose_index"
            ]
        );
    }

    #[test]
    fn page_event_draws_fields_in_the_same_order_without_a_name() {
        let mut pool = UserPool::from_users([pooled_user()]);
        let generator = PageEventGenerator::with_urls(vec![url(urls::SHOP)]);
        let mut provider = ScriptedProvider::new();
        provider.uuids.push_back(Uuid::from_u128(2));
        provider.indices.push_back(0);

        generator.generate(&mut pool, &mut provider).unwrap();

        assert_eq!(
            provider.trace,
            [
                "uuid",
                "date_time_this_year",
                "sentence",
                "uri_path",
                "choose_index"
            ]
        );
    }
}
