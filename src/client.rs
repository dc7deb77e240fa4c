use crate::error::{FetchError, TransportError};
use crate::settings::Settings;
use crate::slot::{ResultSlot, SlotWatcher};
use crate::structs::{Course, Discipline, Resource, Semester};
use crate::transport::{HttpTransport, Request, ReqwestTransport};

use log::{debug, error};
use std::sync::Arc;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;

const ERROR_CHANNEL_CAPACITY: usize = 16;

struct Shared<T> {
    settings: Settings,
    transport: T,
    course: ResultSlot<Course>,
    semester: ResultSlot<Semester>,
    discipline: ResultSlot<Discipline>,
    errors: broadcast::Sender<Arc<FetchError>>,
}

impl<T: HttpTransport> Shared<T> {
    async fn fetch<R, F>(&self, resource: Resource, request: Request, slot: &ResultSlot<R>, decode: F)
    where
        F: FnOnce(&str) -> serde_json::Result<R>,
    {
        let url = request.url.clone();
        debug!("{} {}", request.method, url);

        let outcome = match self.transport.execute(request).await {
            Ok(body) => decode(&body).map_err(|source| FetchError::Decode {
                resource,
                url: url.clone(),
                source,
            }),
            Err(source) => Err(FetchError::Transport {
                resource,
                url: url.clone(),
                source,
            }),
        };

        match outcome {
            Ok(value) => {
                if !slot.publish(value) {
                    debug!("{url}: client gone, {resource} dropped");
                }
            }
            Err(err) => {
                error!("{err}");
                // nobody listening is fine, the log line above is the report
                let _ = self.errors.send(Arc::new(err));
            }
        }
    }
}

/// Fetches courses, semesters and disciplines from the SDM web service and
/// keeps the latest of each in its own slot.
///
/// Every `fetch_*` call spawns one Tokio task and returns immediately; it
/// must be called from within a Tokio runtime. Outcomes arrive through the
/// `watch_*` slots or, on failure, through [`errors`](Self::errors). Concurrent
/// fetches of the same resource are not ordered: the last one to finish wins.
///
/// Dropping the client closes its slots. Fetches still in flight run to
/// completion but publish nothing.
pub struct ResourceClient<T: HttpTransport = ReqwestTransport> {
    shared: Arc<Shared<T>>,
}

impl ResourceClient<ReqwestTransport> {
    pub fn new(settings: Settings) -> Result<Self, TransportError> {
        Ok(Self::with_transport(settings, ReqwestTransport::new()?))
    }
}

impl<T: HttpTransport> ResourceClient<T> {
    pub fn with_transport(settings: Settings, transport: T) -> Self {
        let (errors, _) = broadcast::channel(ERROR_CHANNEL_CAPACITY);
        Self {
            shared: Arc::new(Shared {
                settings,
                transport,
                course: ResultSlot::new(),
                semester: ResultSlot::new(),
                discipline: ResultSlot::new(),
                errors,
            }),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.shared.settings
    }

    /// `GET {base_url}/curso`, decoded as a [`Course`] object.
    pub fn fetch_course(&self) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let request = Request::get(shared.settings.course_url());
        tokio::spawn(async move {
            shared
                .fetch(Resource::Course, request, &shared.course, |body| {
                    serde_json::from_str(body)
                })
                .await
        })
    }

    /// `GET {base_url}/semestre/{semester_id}`. The id is not validated.
    pub fn fetch_semester(&self, semester_id: i32) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let request = Request::get(shared.settings.semester_url(semester_id));
        tokio::spawn(async move {
            shared
                .fetch(Resource::Semester, request, &shared.semester, |body| {
                    Semester::from_json(semester_id, body)
                })
                .await
        })
    }

    /// `POST {base_url}/disciplina` with the single form field `sigla=code`.
    pub fn fetch_discipline(&self, code: &str) -> JoinHandle<()> {
        let shared = Arc::clone(&self.shared);
        let request = Request::post_form(shared.settings.discipline_url(), [("sigla", code)]);
        tokio::spawn(async move {
            shared
                .fetch(Resource::Discipline, request, &shared.discipline, |body| {
                    serde_json::from_str(body)
                })
                .await
        })
    }

    pub fn watch_course(&self) -> SlotWatcher<Course> {
        self.shared.course.subscribe()
    }

    pub fn watch_semester(&self) -> SlotWatcher<Semester> {
        self.shared.semester.subscribe()
    }

    pub fn watch_discipline(&self) -> SlotWatcher<Discipline> {
        self.shared.discipline.subscribe()
    }

    /// Failures of fetches that complete after this call.
    pub fn errors(&self) -> broadcast::Receiver<Arc<FetchError>> {
        self.shared.errors.subscribe()
    }
}

impl<T: HttpTransport> Drop for ResourceClient<T> {
    fn drop(&mut self) {
        self.shared.course.close();
        self.shared.semester.close();
        self.shared.discipline.close();
    }
}
