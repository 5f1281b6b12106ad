//! Core-pinned task spawning for the three signal tasks.
//!
//! ESP-IDF implements `std::thread` on top of FreeRTOS tasks.
//! `esp_pthread_set_cfg()` sets thread-local configuration (core, priority,
//! stack, name) that applies to the *next* thread created from the calling
//! thread, so the config → spawn pair must not be interleaved with other
//! thread creation.  On non-ESP targets the core and priority are ignored.
//!
//! | Task            | Core | Priority | Why                                |
//! |-----------------|------|----------|------------------------------------|
//! | input monitor   | App  | 7        | timely edge detection              |
//! | mode controller | App  | 6        | bounded mode-change latency        |
//! | display driver  | App  | 5        | may lag; channel holds latest only |

use crate::error::{Error, Result};

/// CPU core a task is pinned to.  Every signal task runs on APP_CPU; core 0
/// is left to the IDF system tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum Core {
    /// Core 1 (APP_CPU).
    App = 1,
}

/// Placement and sizing of one task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaskSpec {
    /// Null-terminated for FreeRTOS (e.g. `"display\0"`).
    pub name: &'static str,
    pub core: Core,
    pub priority: u8,
    pub stack_kb: usize,
}

impl TaskSpec {
    /// Name without the trailing terminator.
    pub fn display_name(&self) -> &'static str {
        self.name.trim_end_matches('\0')
    }
}

pub const INPUT_TASK: TaskSpec = TaskSpec {
    name: "input\0",
    core: Core::App,
    priority: 7,
    stack_kb: 8,
};

pub const CONTROLLER_TASK: TaskSpec = TaskSpec {
    name: "controller\0",
    core: Core::App,
    priority: 6,
    stack_kb: 8,
};

pub const DISPLAY_TASK: TaskSpec = TaskSpec {
    name: "display\0",
    core: Core::App,
    priority: 5,
    stack_kb: 8,
};

/// Spawn `f` as a task placed according to `task`.
#[cfg(target_os = "espidf")]
pub fn spawn_task(
    task: TaskSpec,
    f: impl FnOnce() + Send + 'static,
) -> Result<std::thread::JoinHandle<()>> {
    // SAFETY: the config struct is fully initialised by the IDF helper and
    // `name` is a 'static null-terminated string.
    let ret = unsafe {
        let mut cfg = esp_idf_sys::esp_create_default_pthread_config();
        cfg.pin_to_core = task.core as i32;
        cfg.prio = i32::from(task.priority);
        cfg.stack_size = (task.stack_kb * 1024) as i32;
        cfg.thread_name = task.name.as_ptr().cast();
        esp_idf_sys::esp_pthread_set_cfg(&cfg)
    };
    if ret != esp_idf_sys::ESP_OK as i32 {
        return Err(Error::Init("esp_pthread_set_cfg failed"));
    }

    log::info!(
        "Spawning '{}' on {:?} (pri={}, stack={}KB)",
        task.display_name(),
        task.core,
        task.priority,
        task.stack_kb
    );

    std::thread::Builder::new()
        .name(task.display_name().into())
        .spawn(f)
        .map_err(|_| Error::Init("task creation failed"))
}

/// Host threads carry more frame overhead than FreeRTOS tasks.
#[cfg(not(target_os = "espidf"))]
const SIM_MIN_STACK_KB: usize = 64;

/// Simulation fallback — ignores core affinity and priority.
#[cfg(not(target_os = "espidf"))]
pub fn spawn_task(
    task: TaskSpec,
    f: impl FnOnce() + Send + 'static,
) -> Result<std::thread::JoinHandle<()>> {
    log::info!(
        "Spawning '{}' (sim, no core pinning, stack={}KB)",
        task.display_name(),
        task.stack_kb
    );

    std::thread::Builder::new()
        .name(task.display_name().into())
        .stack_size(task.stack_kb.max(SIM_MIN_STACK_KB) * 1024)
        .spawn(f)
        .map_err(|_| Error::Init("task creation failed"))
}
