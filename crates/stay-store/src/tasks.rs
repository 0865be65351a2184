//! Task orchestrator
//!
//! Tasks are the only place the core performs I/O. Each [`Task`] is an
//! explicit command object keyed by a name; the [`TaskRunner`] spawns it on
//! the ambient tokio runtime, and the task dispatches plain actions over
//! its lifetime (`Idle -> Pending -> Fulfilled | Rejected`). The reducer
//! never sees a task.
//!
//! Two in-flight fetches of the same collection are neither coalesced nor
//! cancelled: whichever response arrives last overwrites the collection.
//! Repeated identical fetches are only driven by navigation, so
//! last-completion-wins is acceptable here.

use crate::actions::Action;
use crate::dispatcher::Dispatcher;
use crate::routes::Route;
use crate::state::{AuthorizationStatus, ErrorBanner};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use stay_client::{AuthData, Comment, NewComment, Offer, StayClient};
use stay_config::TokenStorage;
use tokio::task::JoinHandle;

/// How long an error banner stays up before the deferred clear fires
pub const ERROR_DISPLAY_TIMEOUT: Duration = Duration::from_secs(2);

/// An asynchronous unit of work
#[derive(Debug, Clone, PartialEq)]
pub enum Task {
    FetchOffers,
    FetchFavoriteOffers,
    FetchCurrentOffer { id: String },
    FetchNearestOffers { id: String },
    FetchComments { id: String },
    PostComment { id: String, comment: NewComment },
    /// Fire-and-forget: flips the flag server-side, changes no local state
    ToggleFavorite(Offer),
    CheckSession,
    Login(AuthData),
    Logout,
    ClearErrorAfterDelay { error_id: u64 },
}

impl Task {
    /// Unique task name, used for lifecycle logging
    pub fn name(&self) -> &'static str {
        match self {
            Task::FetchOffers => "fetch-offers",
            Task::FetchFavoriteOffers => "fetch-favorite-offers",
            Task::FetchCurrentOffer { .. } => "fetch-current-offer",
            Task::FetchNearestOffers { .. } => "fetch-nearest-offers",
            Task::FetchComments { .. } => "fetch-comments",
            Task::PostComment { .. } => "post-comment",
            Task::ToggleFavorite(_) => "toggle-favorite",
            Task::CheckSession => "check-session",
            Task::Login(_) => "login",
            Task::Logout => "logout",
            Task::ClearErrorAfterDelay { .. } => "clear-error-after-delay",
        }
    }
}

/// Lifecycle phase of one task run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPhase {
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

impl fmt::Display for TaskPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskPhase::Idle => "idle",
            TaskPhase::Pending => "pending",
            TaskPhase::Fulfilled => "fulfilled",
            TaskPhase::Rejected => "rejected",
        };
        f.write_str(label)
    }
}

/// Value a task hands back to its caller
#[derive(Debug, Clone, PartialEq)]
pub enum TaskOutcome {
    Done,
    /// Result of `PostComment`; `None` means no comment was added
    Posted(Option<Comment>),
}

/// Capabilities every task runs against
///
/// Constructed once at process start and cloned into each spawned task; no
/// task reaches for ambient globals.
#[derive(Clone)]
pub struct TaskContext {
    api: Arc<dyn StayClient>,
    tokens: TokenStorage,
    dispatcher: Dispatcher,
    error_seq: Arc<AtomicU64>,
}

impl TaskContext {
    fn dispatch(&self, action: Action) {
        self.dispatcher.dispatch(action);
    }

    /// Show an error banner and schedule its keyed auto-clear
    fn fail(&self, message: impl Into<String>) {
        let id = self.error_seq.fetch_add(1, Ordering::Relaxed) + 1;
        let banner = ErrorBanner::new(id, message);
        log::error!("{}", banner.message);
        self.dispatch(Action::SetError(banner));

        let ctx = self.clone();
        tokio::spawn(async move {
            clear_error_after_delay(&ctx, id).await;
        });
    }
}

/// Spawns tasks and hands out their pending handles
pub struct TaskRunner {
    ctx: TaskContext,
    handle: tokio::runtime::Handle,
}

impl TaskRunner {
    /// Must be called from within a tokio runtime
    pub fn new(api: Arc<dyn StayClient>, tokens: TokenStorage, dispatcher: Dispatcher) -> Self {
        Self {
            ctx: TaskContext {
                api,
                tokens,
                dispatcher,
                error_seq: Arc::new(AtomicU64::new(0)),
            },
            handle: tokio::runtime::Handle::current(),
        }
    }

    /// Start a task, returning its pending handle
    pub fn run(&self, task: Task) -> JoinHandle<TaskOutcome> {
        let ctx = self.ctx.clone();
        let name = task.name();
        log::debug!("task {name}: {} -> {}", TaskPhase::Idle, TaskPhase::Pending);

        self.handle.spawn(async move {
            let (phase, outcome) = match task {
                Task::FetchOffers => (fetch_offers(&ctx).await, TaskOutcome::Done),
                Task::FetchFavoriteOffers => (fetch_favorite_offers(&ctx).await, TaskOutcome::Done),
                Task::FetchCurrentOffer { id } => {
                    (fetch_current_offer(&ctx, &id).await, TaskOutcome::Done)
                }
                Task::FetchNearestOffers { id } => {
                    (fetch_nearest_offers(&ctx, &id).await, TaskOutcome::Done)
                }
                Task::FetchComments { id } => (fetch_comments(&ctx, &id).await, TaskOutcome::Done),
                Task::PostComment { id, comment } => {
                    let (phase, posted) = post_comment(&ctx, &id, &comment).await;
                    (phase, TaskOutcome::Posted(posted))
                }
                Task::ToggleFavorite(offer) => (toggle_favorite(&ctx, &offer).await, TaskOutcome::Done),
                Task::CheckSession => (check_session(&ctx).await, TaskOutcome::Done),
                Task::Login(auth) => (login(&ctx, &auth).await, TaskOutcome::Done),
                Task::Logout => (logout(&ctx).await, TaskOutcome::Done),
                Task::ClearErrorAfterDelay { error_id } => {
                    (clear_error_after_delay(&ctx, error_id).await, TaskOutcome::Done)
                }
            };

            log::debug!("task {name}: {} -> {}", TaskPhase::Pending, phase);
            outcome
        })
    }
}

async fn fetch_offers(ctx: &TaskContext) -> TaskPhase {
    ctx.dispatch(Action::SetOffersDataLoadingStatus(true));
    match ctx.api.fetch_offers().await {
        Ok(offers) => {
            ctx.dispatch(Action::SetOffersDataLoadingStatus(false));
            ctx.dispatch(Action::LoadOffers(offers));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            // loading must not stay stuck when the fetch fails
            ctx.dispatch(Action::SetOffersDataLoadingStatus(false));
            ctx.fail(format!("Failed to load offers: {e}"));
            TaskPhase::Rejected
        }
    }
}

async fn fetch_favorite_offers(ctx: &TaskContext) -> TaskPhase {
    ctx.dispatch(Action::SetOffersDataLoadingStatus(true));
    match ctx.api.fetch_favorite_offers().await {
        Ok(offers) => {
            ctx.dispatch(Action::SetOffersDataLoadingStatus(false));
            ctx.dispatch(Action::LoadFavoriteOffers(offers));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            ctx.dispatch(Action::SetOffersDataLoadingStatus(false));
            ctx.fail(format!("Failed to load favorites: {e}"));
            TaskPhase::Rejected
        }
    }
}

async fn fetch_current_offer(ctx: &TaskContext, id: &str) -> TaskPhase {
    ctx.dispatch(Action::SetOffersDataLoadingStatus(true));
    match ctx.api.fetch_offer(id).await {
        Ok(offer) => {
            ctx.dispatch(Action::SetOffersDataLoadingStatus(false));
            ctx.dispatch(Action::LoadCurrentOffer(offer));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            ctx.dispatch(Action::SetOffersDataLoadingStatus(false));
            // A missing offer is a navigation concern, not a banner
            log::warn!("Failed to load offer {id}: {e}");
            ctx.dispatch(Action::RedirectToRoute(Route::NotFound));
            TaskPhase::Rejected
        }
    }
}

async fn fetch_nearest_offers(ctx: &TaskContext, id: &str) -> TaskPhase {
    match ctx.api.fetch_nearby_offers(id).await {
        Ok(offers) => {
            ctx.dispatch(Action::LoadNearestOffers(offers));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            ctx.fail(format!("Failed to load nearby offers: {e}"));
            TaskPhase::Rejected
        }
    }
}

async fn fetch_comments(ctx: &TaskContext, id: &str) -> TaskPhase {
    match ctx.api.fetch_comments(id).await {
        Ok(comments) => {
            ctx.dispatch(Action::LoadComments(comments));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            ctx.fail(format!("Failed to load comments: {e}"));
            TaskPhase::Rejected
        }
    }
}

async fn post_comment(ctx: &TaskContext, id: &str, comment: &NewComment) -> (TaskPhase, Option<Comment>) {
    match ctx.api.post_comment(id, comment).await {
        Ok(created) => {
            ctx.dispatch(Action::CommentPosted(Some(created.clone())));
            (TaskPhase::Fulfilled, Some(created))
        }
        Err(e) => {
            // No banner: the sentinel tells the caller nothing was added
            log::warn!("Failed to post comment on offer {id}: {e}");
            ctx.dispatch(Action::CommentPosted(None));
            (TaskPhase::Rejected, None)
        }
    }
}

async fn toggle_favorite(ctx: &TaskContext, offer: &Offer) -> TaskPhase {
    // Request flips the current flag; local state is left untouched
    match ctx.api.set_favorite_status(&offer.id, !offer.is_favorite).await {
        Ok(()) => TaskPhase::Fulfilled,
        Err(e) => {
            ctx.fail(format!("Failed to update favorite status: {e}"));
            TaskPhase::Rejected
        }
    }
}

async fn check_session(ctx: &TaskContext) -> TaskPhase {
    match ctx.api.fetch_login().await {
        Ok(user) => {
            ctx.dispatch(Action::LoadUserData(user));
            ctx.dispatch(Action::RequireAuthorization(AuthorizationStatus::Auth));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            // Expected path for an anonymous visitor; never a banner
            log::info!("No active session: {e}");
            if let Err(e) = ctx.tokens.drop_token() {
                log::warn!("Failed to drop stale token: {e}");
            }
            ctx.dispatch(Action::RequireAuthorization(AuthorizationStatus::NoAuth));
            TaskPhase::Rejected
        }
    }
}

async fn login(ctx: &TaskContext, auth: &AuthData) -> TaskPhase {
    match ctx.api.login(auth).await {
        Ok(user) => {
            if let Err(e) = ctx.tokens.save(&user.token) {
                log::error!("Failed to persist auth token: {e}");
            }
            ctx.dispatch(Action::LoadUserData(user));
            ctx.dispatch(Action::RequireAuthorization(AuthorizationStatus::Auth));
            ctx.dispatch(Action::RedirectToRoute(Route::Root));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            ctx.fail(format!("Failed to sign in: {e}"));
            TaskPhase::Rejected
        }
    }
}

async fn logout(ctx: &TaskContext) -> TaskPhase {
    match ctx.api.logout().await {
        Ok(()) => {
            if let Err(e) = ctx.tokens.drop_token() {
                log::warn!("Failed to drop token on logout: {e}");
            }
            ctx.dispatch(Action::RequireAuthorization(AuthorizationStatus::NoAuth));
            TaskPhase::Fulfilled
        }
        Err(e) => {
            ctx.fail(format!("Failed to sign out: {e}"));
            TaskPhase::Rejected
        }
    }
}

async fn clear_error_after_delay(ctx: &TaskContext, error_id: u64) -> TaskPhase {
    tokio::time::sleep(ERROR_DISPLAY_TIMEOUT).await;
    ctx.dispatch(Action::ClearError { error_id });
    TaskPhase::Fulfilled
}
