use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, warn};

use api::{
    ApiError,
    image::ImageDetail,
    tag::{GalleryItem, SearchTagReq, SearchTagResp, Tag, display_tag, tag_key},
};

use crate::tags::{TagRanking, rank};

// which page of the console is showing
//
// the detail modal is not a view of its own; it overlays whichever view is up
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Cloud,
    Gallery,
}

// what happened to a completed request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    // issued for a selection that is no longer current, and dropped
    Stale,
}

// a page fetch, stamped with the selection it belongs to
//
// the cursor is captured when the request is issued, so a continuation always
// asks for the page after the one the user was looking at
#[derive(Clone, Debug, PartialEq)]
pub struct PageRequest {
    pub generation: u64,
    pub tag_key: String,
    pub cursor: Option<String>,
}

impl PageRequest {
    pub fn is_continuation(&self) -> bool {
        self.cursor.is_some()
    }

    pub fn to_req(&self, limit: u32) -> SearchTagReq {
        SearchTagReq {
            tag_key: self.tag_key.clone(),
            limit,
            next_token: self.cursor.clone(),
        }
    }
}

// a tag list fetch
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TagsRequest {
    pub ticket: u64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct DetailRequest {
    pub ticket: u64,
    pub image_id: String,
}

// Dashboard
//
// the whole view state of the console.  every mutation goes through one of the
// transition functions below; the ones that start a fetch hand back a request
// ticket, and the matching apply_*/fail_* function compares that ticket with
// the current state before touching anything
//
// generation identifies one tag selection, detail_ticket one opening of the
// modal and tags_ticket one tag list fetch.  all three only ever count up, even across sign_out, so a response
// from before a reset can never match a request issued after it
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Dashboard {
    tags: Vec<Tag>,
    tags_loaded: bool,
    tags_error: Option<String>,
    tags_ticket: u64,
    query: String,

    selected_tag: Option<String>,
    images: Vec<GalleryItem>,
    next_token: Option<String>,
    pending: Option<PageRequest>,
    page_error: Option<String>,
    generation: u64,

    selected_image: Option<ImageDetail>,
    detail_loading: bool,
    detail_ticket: u64,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    // accessors

    pub fn view(&self) -> View {
        match self.selected_tag {
            Some(_) => View::Gallery,
            None => View::Cloud,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    pub fn tags_loaded(&self) -> bool {
        self.tags_loaded
    }

    pub fn tags_error(&self) -> Option<&str> {
        self.tags_error.as_deref()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn selected_tag(&self) -> Option<&str> {
        self.selected_tag.as_deref()
    }

    // the selected tag without its namespace marker
    pub fn selected_label(&self) -> Option<&str> {
        self.selected_tag.as_deref().map(display_tag)
    }

    pub fn images(&self) -> &[GalleryItem] {
        &self.images
    }

    pub fn next_token(&self) -> Option<&str> {
        self.next_token.as_deref()
    }

    // true while the first page of a selection is outstanding
    pub fn is_loading(&self) -> bool {
        self.pending.as_ref().is_some_and(|req| !req.is_continuation())
    }

    pub fn is_loading_more(&self) -> bool {
        self.pending.as_ref().is_some_and(PageRequest::is_continuation)
    }

    pub fn can_load_more(&self) -> bool {
        self.selected_tag.is_some() && self.next_token.is_some() && self.pending.is_none()
    }

    pub fn page_error(&self) -> Option<&str> {
        self.page_error.as_deref()
    }

    pub fn selected_image(&self) -> Option<&ImageDetail> {
        self.selected_image.as_ref()
    }

    pub fn detail_loading(&self) -> bool {
        self.detail_loading
    }

    // tag cloud

    // only the latest fetch may land; an earlier one still in flight is dropped
    pub fn request_tags(&mut self) -> TagsRequest {
        self.tags_ticket += 1;
        TagsRequest {
            ticket: self.tags_ticket,
        }
    }

    pub fn set_tags(&mut self, req: &TagsRequest, tags: Vec<Tag>) -> Outcome {
        if req.ticket != self.tags_ticket {
            debug!(ticket = req.ticket, "dropping stale tag list");
            return Outcome::Stale;
        }

        debug!(count = tags.len(), "tag list loaded");
        self.tags = tags;
        self.tags_loaded = true;
        self.tags_error = None;

        Outcome::Applied
    }

    // a failed refresh keeps whatever list we already had
    pub fn fail_tags(&mut self, req: &TagsRequest, err: &ApiError) -> Outcome {
        if req.ticket != self.tags_ticket {
            return Outcome::Stale;
        }

        warn!("failed to fetch tags: {err}");
        self.tags_error = Some(err.to_string());

        Outcome::Applied
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn ranking<R: Rng + ?Sized>(&self, rng: &mut R) -> TagRanking {
        rank(&self.tags, &self.query, rng)
    }

    // gallery

    // start a fresh search for a tag (from the cloud or any pivot)
    //
    // the new tag replaces the old one outright: results and cursor are cleared
    // and the detail modal closes
    pub fn select_tag(&mut self, value: &str) -> Option<PageRequest> {
        if value.trim().is_empty() {
            return None;
        }

        let key = tag_key(value);
        debug!(tag = key.as_str(), "selecting tag");

        self.generation += 1;
        self.selected_tag = Some(key.clone());
        self.images.clear();
        self.next_token = None;
        self.page_error = None;
        self.close_detail();

        let req = PageRequest {
            generation: self.generation,
            tag_key: key,
            cursor: None,
        };
        self.pending = Some(req.clone());

        Some(req)
    }

    // ask for the page after the current one
    //
    // at most one page request per selection is outstanding, so a double click
    // cannot fetch the same page twice
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if !self.can_load_more() {
            return None;
        }

        let req = PageRequest {
            generation: self.generation,
            tag_key: self.selected_tag.clone()?,
            cursor: self.next_token.clone(),
        };
        self.pending = Some(req.clone());
        self.page_error = None;

        Some(req)
    }

    pub fn apply_page(&mut self, req: &PageRequest, resp: SearchTagResp) -> Outcome {
        if self.pending.as_ref() != Some(req) {
            debug!(generation = req.generation, "dropping stale page");
            return Outcome::Stale;
        }

        self.pending = None;

        if req.is_continuation() {
            let known: HashSet<String> = self.images.iter().map(|i| i.image_id.clone()).collect();
            self.images
                .extend(resp.items.into_iter().filter(|i| !known.contains(&i.image_id)));
        } else {
            self.images = resp.items;
        }

        self.next_token = resp.next_token;
        Outcome::Applied
    }

    // the list and cursor are left as they were, so "load more" can be retried
    pub fn fail_page(&mut self, req: &PageRequest, err: &ApiError) -> Outcome {
        if self.pending.as_ref() != Some(req) {
            return Outcome::Stale;
        }

        warn!("failed to fetch page for {}: {err}", req.tag_key);
        self.pending = None;
        self.page_error = Some(err.to_string());

        Outcome::Applied
    }

    // back to the cloud
    pub fn back(&mut self) {
        self.generation += 1;
        self.selected_tag = None;
        self.images.clear();
        self.next_token = None;
        self.pending = None;
        self.page_error = None;
        self.close_detail();
    }

    // detail modal

    // the modal opens straight away with the gallery record and is filled in
    // once the full record arrives
    pub fn open_image(&mut self, item: &GalleryItem) -> DetailRequest {
        self.detail_ticket += 1;
        self.selected_image = Some(ImageDetail::from(item.clone()));
        self.detail_loading = true;

        DetailRequest {
            ticket: self.detail_ticket,
            image_id: item.image_id.clone(),
        }
    }

    // on failure the shallow record stays up rather than closing the modal
    pub fn apply_detail(
        &mut self,
        req: &DetailRequest,
        result: Result<ImageDetail, ApiError>,
    ) -> Outcome {
        if req.ticket != self.detail_ticket || self.selected_image.is_none() {
            return Outcome::Stale;
        }

        self.detail_loading = false;

        match result {
            Ok(image) => self.selected_image = Some(image),
            Err(err) => warn!("failed to fetch image {}, showing gallery data: {err}", req.image_id),
        }

        Outcome::Applied
    }

    pub fn close_detail(&mut self) {
        self.detail_ticket += 1;
        self.selected_image = None;
        self.detail_loading = false;
    }

    // session

    pub fn sign_out(&mut self) {
        let generation = self.generation + 1;
        let detail_ticket = self.detail_ticket + 1;
        let tags_ticket = self.tags_ticket + 1;

        *self = Dashboard {
            generation,
            detail_ticket,
            tags_ticket,
            ..Default::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> GalleryItem {
        serde_json::from_value(serde_json::json!({
            "ImageId": id,
            "ThumbnailUrl": format!("https://t/{id}"),
            "ImageName": format!("{id}.jpg"),
        }))
        .unwrap()
    }

    fn page(ids: &[&str], next: Option<&str>) -> SearchTagResp {
        SearchTagResp {
            items: ids.iter().map(|id| item(id)).collect(),
            next_token: next.map(String::from),
        }
    }

    fn ids(dashboard: &Dashboard) -> Vec<&str> {
        dashboard.images().iter().map(|i| i.image_id.as_str()).collect()
    }

    #[test]
    fn selecting_a_tag_loads_the_gallery() {
        let mut dashboard = Dashboard::new();
        assert_eq!(dashboard.view(), View::Cloud);

        let req = dashboard.select_tag("Dog").unwrap();
        assert_eq!(req.tag_key, "TAG#Dog");
        assert_eq!(req.cursor, None);
        assert_eq!(dashboard.view(), View::Gallery);
        assert!(dashboard.is_loading());
        assert_eq!(dashboard.selected_label(), Some("Dog"));

        assert_eq!(dashboard.apply_page(&req, page(&["1", "2"], Some("c1"))), Outcome::Applied);
        assert!(!dashboard.is_loading());
        assert_eq!(ids(&dashboard), vec!["1", "2"]);
        assert_eq!(dashboard.next_token(), Some("c1"));
        assert!(dashboard.can_load_more());
    }

    #[test]
    fn empty_tags_are_ignored() {
        let mut dashboard = Dashboard::new();

        assert_eq!(dashboard.select_tag("  "), None);
        assert_eq!(dashboard.view(), View::Cloud);
    }

    #[test]
    fn load_more_appends_and_replaces_cursor() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.select_tag("Dog").unwrap();
        dashboard.apply_page(&first, page(&["1", "2"], Some("c1")));

        let more = dashboard.load_more().unwrap();
        assert_eq!(more.cursor.as_deref(), Some("c1"));
        assert_eq!(more.to_req(50).next_token.as_deref(), Some("c1"));
        assert!(dashboard.is_loading_more());

        dashboard.apply_page(&more, page(&["3"], None));
        assert_eq!(ids(&dashboard), vec!["1", "2", "3"]);
        assert_eq!(dashboard.next_token(), None);
        assert_eq!(dashboard.load_more(), None);
    }

    #[test]
    fn double_load_more_fetches_once() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.select_tag("Dog").unwrap();
        dashboard.apply_page(&first, page(&["1"], Some("c1")));

        let more = dashboard.load_more().unwrap();
        assert_eq!(dashboard.load_more(), None);

        dashboard.apply_page(&more, page(&["2"], Some("c2")));
        let again = dashboard.load_more().unwrap();
        assert_eq!(again.cursor.as_deref(), Some("c2"));

        // a replay of the earlier continuation must not land twice
        assert_eq!(dashboard.apply_page(&more, page(&["2"], Some("c2"))), Outcome::Stale);

        dashboard.apply_page(&again, page(&["3"], None));
        assert_eq!(ids(&dashboard), vec!["1", "2", "3"]);
    }

    #[test]
    fn appended_pages_are_deduplicated() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.select_tag("Dog").unwrap();
        dashboard.apply_page(&first, page(&["1", "2"], Some("c1")));

        let more = dashboard.load_more().unwrap();
        dashboard.apply_page(&more, page(&["2", "3"], None));

        assert_eq!(ids(&dashboard), vec!["1", "2", "3"]);
    }

    #[test]
    fn switching_tags_drops_the_old_results() {
        let mut dashboard = Dashboard::new();
        let dog = dashboard.select_tag("Dog").unwrap();
        let cat = dashboard.select_tag("Cat").unwrap();

        // cat answers first, dog straggles in afterwards
        assert_eq!(dashboard.apply_page(&cat, page(&["c1"], None)), Outcome::Applied);
        assert_eq!(dashboard.apply_page(&dog, page(&["d1"], Some("dc"))), Outcome::Stale);

        assert_eq!(dashboard.selected_tag(), Some("TAG#Cat"));
        assert_eq!(ids(&dashboard), vec!["c1"]);
        assert_eq!(dashboard.next_token(), None);
    }

    #[test]
    fn stale_continuation_never_reaches_a_new_selection() {
        let mut dashboard = Dashboard::new();
        let dog = dashboard.select_tag("Dog").unwrap();
        dashboard.apply_page(&dog, page(&["d1"], Some("dc")));
        let dog_more = dashboard.load_more().unwrap();

        let cat = dashboard.select_tag("Cat").unwrap();
        assert_eq!(dashboard.apply_page(&dog_more, page(&["d2"], Some("dc2"))), Outcome::Stale);
        assert_eq!(dashboard.apply_page(&cat, page(&["c1"], Some("cc"))), Outcome::Applied);

        assert_eq!(ids(&dashboard), vec!["c1"]);
        assert_eq!(dashboard.next_token(), Some("cc"));
    }

    #[test]
    fn reselecting_the_same_tag_is_a_new_selection() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.select_tag("Dog").unwrap();
        let second = dashboard.select_tag("TAG#Dog").unwrap();

        assert_ne!(first, second);
        assert_eq!(dashboard.apply_page(&first, page(&["old"], None)), Outcome::Stale);
        assert_eq!(dashboard.apply_page(&second, page(&["new"], None)), Outcome::Applied);
        assert_eq!(ids(&dashboard), vec!["new"]);
    }

    #[test]
    fn failures_leave_state_intact() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.select_tag("Dog").unwrap();
        dashboard.apply_page(&first, page(&["1"], Some("c1")));

        let more = dashboard.load_more().unwrap();
        let err = ApiError::Transport(String::from("offline"));
        assert_eq!(dashboard.fail_page(&more, &err), Outcome::Applied);

        assert_eq!(ids(&dashboard), vec!["1"]);
        assert_eq!(dashboard.next_token(), Some("c1"));
        assert!(dashboard.page_error().is_some());
        assert!(dashboard.can_load_more());
    }

    #[test]
    fn back_returns_to_the_cloud() {
        let mut dashboard = Dashboard::new();
        let req = dashboard.select_tag("Dog").unwrap();
        dashboard.back();

        assert_eq!(dashboard.view(), View::Cloud);
        assert_eq!(dashboard.apply_page(&req, page(&["1"], Some("c"))), Outcome::Stale);
        assert!(dashboard.images().is_empty());
        assert_eq!(dashboard.next_token(), None);
        assert!(!dashboard.is_loading());
    }

    #[test]
    fn detail_falls_back_to_gallery_record() {
        let mut dashboard = Dashboard::new();
        let req = dashboard.open_image(&item("1"));

        assert!(dashboard.detail_loading());
        assert_eq!(dashboard.selected_image().unwrap().image_id, "1");

        let err = ApiError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(dashboard.apply_detail(&req, Err(err)), Outcome::Applied);

        let image = dashboard.selected_image().unwrap();
        assert_eq!(image.image_name, "1.jpg");
        assert_eq!(image.display_url(), Some("https://t/1"));
        assert!(!dashboard.detail_loading());
    }

    #[test]
    fn detail_replaces_shallow_record() {
        let mut dashboard = Dashboard::new();
        let req = dashboard.open_image(&item("1"));
        let full: ImageDetail = serde_json::from_value(serde_json::json!({
            "ImageId": "1",
            "Labels": ["Dog"],
            "Make": "Nikon"
        }))
        .unwrap();

        dashboard.apply_detail(&req, Ok(full));
        assert_eq!(dashboard.selected_image().unwrap().labels, vec!["Dog"]);
    }

    #[test]
    fn stale_details_are_dropped() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.open_image(&item("1"));
        let second = dashboard.open_image(&item("2"));
        let detail = |id: &str| -> ImageDetail {
            serde_json::from_value(serde_json::json!({"ImageId": id})).unwrap()
        };

        assert_eq!(dashboard.apply_detail(&first, Ok(detail("1"))), Outcome::Stale);
        assert_eq!(dashboard.apply_detail(&second, Ok(detail("2"))), Outcome::Applied);
        assert_eq!(dashboard.selected_image().unwrap().image_id, "2");

        dashboard.close_detail();
        assert_eq!(dashboard.apply_detail(&second, Ok(detail("2"))), Outcome::Stale);
        assert!(dashboard.selected_image().is_none());
    }

    #[test]
    fn pivots_close_the_modal() {
        let mut dashboard = Dashboard::new();
        let detail = dashboard.open_image(&item("1"));
        let req = dashboard.select_tag("Age 20-30").unwrap();

        assert!(dashboard.selected_image().is_none());
        assert_eq!(req.tag_key, "TAG#Age 20-30");
        assert_eq!(
            dashboard.apply_detail(&detail, Err(ApiError::Unauthorized)),
            Outcome::Stale
        );
    }

    #[test]
    fn tag_failures_keep_the_old_list() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.request_tags();
        dashboard.set_tags(&first, vec![Tag::new("Dog", 2)]);

        let again = dashboard.request_tags();
        let err = ApiError::Transport(String::from("offline"));
        assert_eq!(dashboard.fail_tags(&again, &err), Outcome::Applied);

        assert_eq!(dashboard.tags().len(), 1);
        assert!(dashboard.tags_loaded());
        assert!(dashboard.tags_error().is_some());
    }

    #[test]
    fn sign_out_discards_everything() {
        let mut dashboard = Dashboard::new();
        let tags = dashboard.request_tags();
        dashboard.set_tags(&tags, vec![Tag::new("Dog", 2)]);
        dashboard.set_query("do");
        let req = dashboard.select_tag("Dog").unwrap();
        dashboard.sign_out();

        assert!(dashboard.tags().is_empty());
        assert_eq!(dashboard.query(), "");
        assert_eq!(dashboard.view(), View::Cloud);

        // counters survive the reset, so the old ticket cannot match a new one
        let fresh = dashboard.select_tag("Dog").unwrap();
        assert_ne!(fresh.generation, req.generation);
        assert_eq!(dashboard.apply_page(&req, page(&["1"], None)), Outcome::Stale);
    }

    #[test]
    fn tags_from_before_sign_out_are_dropped() {
        let mut dashboard = Dashboard::new();
        let old = dashboard.request_tags();
        dashboard.sign_out();

        let tags = vec![Tag::new("Private", 3)];
        assert_eq!(dashboard.set_tags(&old, tags), Outcome::Stale);
        assert!(!dashboard.tags_loaded());
        assert!(dashboard.tags().is_empty());

        let err = ApiError::Transport(String::from("offline"));
        assert_eq!(dashboard.fail_tags(&old, &err), Outcome::Stale);
        assert_eq!(dashboard.tags_error(), None);

        let fresh = dashboard.request_tags();
        assert_ne!(fresh, old);
        assert_eq!(dashboard.set_tags(&fresh, vec![Tag::new("Dog", 1)]), Outcome::Applied);
        assert!(dashboard.tags_loaded());
    }

    #[test]
    fn only_the_latest_tag_fetch_lands() {
        let mut dashboard = Dashboard::new();
        let first = dashboard.request_tags();
        let second = dashboard.request_tags();

        assert_eq!(dashboard.set_tags(&second, vec![Tag::new("Cat", 4)]), Outcome::Applied);
        assert_eq!(dashboard.set_tags(&first, vec![Tag::new("Dog", 2)]), Outcome::Stale);
        assert_eq!(dashboard.tags(), &[Tag::new("Cat", 4)]);
    }
}
