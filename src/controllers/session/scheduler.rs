use crate::controllers::session::config::ConfigError;
use crate::controllers::session::errors::SessionError;
use crate::controllers::session::events::{FrameData, RenderEvent};
use crate::controllers::session::ports::{DirtyRegion, PixelSink, SessionPresenterPort};
use crate::core::actions::generate_fractal::generate_row::generate_row;
use crate::core::actions::generate_fractal::ports::fractal_algorithm::FractalAlgorithm;
use crate::core::actions::generate_pixel_buffer::ports::colour_map::ColourMap;
use crate::core::data::point::Point;
use crate::core::data::viewport::Viewport;
use log::{debug, trace};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

/// Everything a row task reads. Captured before dispatch and never mutated.
pub struct RenderRequest {
    pub size: u32,
    pub viewport: Viewport,
    pub algorithm: Arc<dyn FractalAlgorithm>,
    pub colour_map: Arc<dyn ColourMap>,
}

struct FrameSnapshot {
    generation: u64,
    started: Instant,
    request: RenderRequest,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Phase {
    Idle,
    Rendering,
}

#[derive(Debug)]
struct SchedulerState {
    phase: Phase,
    generation: u64,
    last_completed_generation: u64,
    /// Newest frame whose `Frame` event has reached the presenter port.
    delivered_generation: u64,
    last_render_duration: Option<Duration>,
}

impl SchedulerState {
    fn settled(&self) -> bool {
        self.phase == Phase::Idle && self.delivered_generation >= self.last_completed_generation
    }
}

struct SharedState {
    rows_remaining: AtomicU32,
    state: Mutex<SchedulerState>,
    idle: Condvar,
    sink: Arc<dyn PixelSink>,
    presenter_port: Arc<dyn SessionPresenterPort>,
}

impl SharedState {
    fn lock_state(&self) -> MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Renders frames as one independent task per row on a worker pool.
///
/// [`render`](Self::render) returns as soon as the rows are queued. Each row
/// task writes its pixels straight into the sink and decrements the shared
/// rows-remaining counter; the task that takes it to zero finishes the frame
/// and returns the scheduler to idle. There is no cancellation, so a new
/// frame can only start once the previous one has completed.
pub struct RowRenderScheduler {
    pool: rayon::ThreadPool,
    shared: Arc<SharedState>,
}

impl RowRenderScheduler {
    pub fn new(
        threads: NonZeroUsize,
        sink: Arc<dyn PixelSink>,
        presenter_port: Arc<dyn SessionPresenterPort>,
    ) -> Result<Self, SessionError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads.get())
            .thread_name(|index| format!("row-render-{}", index))
            .build()?;

        let shared = Arc::new(SharedState {
            rows_remaining: AtomicU32::new(0),
            state: Mutex::new(SchedulerState {
                phase: Phase::Idle,
                generation: 0,
                last_completed_generation: 0,
                delivered_generation: 0,
                last_render_duration: None,
            }),
            idle: Condvar::new(),
            sink,
            presenter_port,
        });

        Ok(Self { pool, shared })
    }

    /// Queues one task per row and returns the new frame's generation.
    ///
    /// Rejected with [`SessionError::Busy`] while a frame is in flight.
    pub fn render(&self, request: RenderRequest) -> Result<u64, SessionError> {
        let size = request.size;

        if size == 0 {
            return Err(SessionError::Config(ConfigError::InvalidSize { size }));
        }

        let generation = {
            let mut state = self.shared.lock_state();

            if state.phase == Phase::Rendering {
                return Err(SessionError::Busy);
            }

            state.phase = Phase::Rendering;
            state.generation += 1;
            self.shared.rows_remaining.store(size, Ordering::Release);
            state.generation
        };

        debug!(
            "Dispatching frame {} ({} rows, {})",
            generation,
            size,
            request.algorithm.display_name()
        );

        self.shared
            .presenter_port
            .present(RenderEvent::RenderStarted { generation });

        let frame = Arc::new(FrameSnapshot {
            generation,
            started: Instant::now(),
            request,
        });

        for y in 0..size {
            let shared = Arc::clone(&self.shared);
            let frame = Arc::clone(&frame);

            self.pool.spawn(move || Self::render_row(&shared, &frame, y));
        }

        Ok(generation)
    }

    fn render_row(shared: &SharedState, frame: &FrameSnapshot, y: u32) {
        let request = &frame.request;
        let row = generate_row(request.algorithm.as_ref(), &request.viewport, request.size, y);

        for (x, result) in row.into_iter().enumerate() {
            shared.sink.set_pixel(
                Point {
                    x: x as i32,
                    y: y as i32,
                },
                request.colour_map.map(result),
            );
        }

        shared.sink.mark_dirty(DirtyRegion::Row(y));
        trace!("Frame {} row {} delivered", frame.generation, y);

        if shared.rows_remaining.fetch_sub(1, Ordering::AcqRel) == 1 {
            Self::complete_frame(shared, frame);
        }
    }

    fn complete_frame(shared: &SharedState, frame: &FrameSnapshot) {
        let render_duration = frame.started.elapsed();

        {
            let mut state = shared.lock_state();
            state.phase = Phase::Idle;
            state.last_completed_generation = frame.generation;
            state.last_render_duration = Some(render_duration);
        }
        shared.idle.notify_all();

        // input is already re-enabled here, so the presenter may start the
        // next frame from inside `present`
        shared.sink.mark_dirty(DirtyRegion::Full);
        shared.presenter_port.present(RenderEvent::Frame(FrameData {
            generation: frame.generation,
            size: frame.request.size,
            render_duration,
        }));

        {
            let mut state = shared.lock_state();
            state.delivered_generation = state.delivered_generation.max(frame.generation);
        }
        shared.idle.notify_all();

        debug!(
            "Frame {} complete in {:?}",
            frame.generation, render_duration
        );
    }

    #[must_use]
    pub fn is_rendering(&self) -> bool {
        self.shared.lock_state().phase == Phase::Rendering
    }

    #[must_use]
    pub fn rows_remaining(&self) -> u32 {
        self.shared.rows_remaining.load(Ordering::Acquire)
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.shared.lock_state().generation
    }

    #[must_use]
    pub fn last_completed_generation(&self) -> u64 {
        self.shared.lock_state().last_completed_generation
    }

    #[must_use]
    pub fn last_render_duration(&self) -> Option<Duration> {
        self.shared.lock_state().last_render_duration
    }

    #[must_use]
    pub fn sink(&self) -> &Arc<dyn PixelSink> {
        &self.shared.sink
    }

    /// Blocks until no frame is in flight and the last completed frame has
    /// been presented. Returns `false` on timeout.
    pub fn wait_until_idle(&self, timeout: Option<Duration>) -> bool {
        let guard = self.shared.lock_state();
        let rendering = |state: &mut SchedulerState| !state.settled();

        match timeout {
            Some(timeout) => {
                let (_guard, result) = self
                    .shared
                    .idle
                    .wait_timeout_while(guard, timeout, rendering)
                    .unwrap_or_else(PoisonError::into_inner);
                !result.timed_out()
            }
            None => {
                let _guard = self
                    .shared
                    .idle
                    .wait_while(guard, rendering)
                    .unwrap_or_else(PoisonError::into_inner);
                true
            }
        }
    }
}
