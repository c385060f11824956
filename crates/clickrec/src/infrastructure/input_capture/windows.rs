//! Windows low-level keyboard and mouse hook implementation.
//!
//! This module installs WH_KEYBOARD_LL and WH_MOUSE_LL hooks using the
//! Windows API. Both hooks live on one dedicated thread that runs a Win32
//! message loop; Windows invokes low-level hook procedures on the thread that
//! installed them, so the event sender is kept in a thread-local of that
//! thread rather than in a process-wide static.
//!
//! Hook handles are owned by [`InstalledHook`] guards on the hook thread and
//! released when the message loop exits. [`WindowsInputCaptureService::stop`]
//! ends the loop by posting `WM_QUIT` to the thread.
//!
//! # Safety
//!
//! This module uses `unsafe` code exclusively for Windows API FFI calls.
//! All `unsafe` blocks are annotated with `// SAFETY:` comments.

#![cfg(target_os = "windows")]

use std::cell::RefCell;
use std::sync::mpsc as std_mpsc;
use std::sync::{Mutex, PoisonError};
use std::thread::{self, JoinHandle};

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, info, warn};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, PeekMessageW, PostThreadMessageW,
    SetWindowsHookExW, UnhookWindowsHookEx, HC_ACTION, HHOOK, KBDLLHOOKSTRUCT, MSG,
    MSLLHOOKSTRUCT, PM_NOREMOVE, WH_KEYBOARD_LL, WH_MOUSE_LL, WM_KEYDOWN, WM_LBUTTONDOWN,
    WM_QUIT, WM_USER,
};

use super::{CaptureError, InputSource, RawInputEvent};

thread_local! {
    /// Sender used by the hook callbacks. Only ever set on the hook thread.
    static HOOK_SINK: RefCell<Option<UnboundedSender<RawInputEvent>>> = const { RefCell::new(None) };
}

/// Windows low-level input capture service.
///
/// Installs `WH_KEYBOARD_LL` and `WH_MOUSE_LL` hooks and runs a dedicated
/// Win32 message loop thread. At most one hook thread runs per service;
/// dropping the service stops it.
pub struct WindowsInputCaptureService {
    hook_thread: Mutex<Option<HookThread>>,
}

struct HookThread {
    thread_id: u32,
    handle: JoinHandle<()>,
}

impl WindowsInputCaptureService {
    /// Creates a new (unstarted) service instance.
    pub fn new() -> Self {
        Self {
            hook_thread: Mutex::new(None),
        }
    }
}

impl Default for WindowsInputCaptureService {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for WindowsInputCaptureService {
    fn start(&self) -> Result<UnboundedReceiver<RawInputEvent>, CaptureError> {
        let mut slot = self
            .hook_thread
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        if slot.is_some() {
            return Err(CaptureError::AlreadyRunning);
        }

        let (tx, rx) = mpsc::unbounded_channel();
        let (ready_tx, ready_rx) = std_mpsc::sync_channel(1);

        let handle = thread::Builder::new()
            .name("clickrec-hooks".to_string())
            .spawn(move || run_hook_thread(tx, ready_tx))
            .map_err(|e| CaptureError::HookThread(e.to_string()))?;

        // Block until the thread reports whether both hooks are installed.
        match ready_rx.recv() {
            Ok(Ok(thread_id)) => {
                *slot = Some(HookThread { thread_id, handle });
                Ok(rx)
            }
            Ok(Err(e)) => {
                let _ = handle.join();
                Err(e)
            }
            Err(_) => {
                let _ = handle.join();
                Err(CaptureError::HookThread(
                    "hook thread exited before installing hooks".to_string(),
                ))
            }
        }
    }

    fn stop(&self) {
        let hook_thread = self
            .hook_thread
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        let Some(hook_thread) = hook_thread else {
            return;
        };

        // SAFETY: posting a message to a thread id has no memory-safety
        // requirements; the thread created its message queue before reporting ready.
        if let Err(e) =
            unsafe { PostThreadMessageW(hook_thread.thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) }
        {
            warn!("failed to post WM_QUIT to hook thread: {e}");
            return;
        }
        if hook_thread.handle.join().is_err() {
            error!("hook thread panicked during shutdown");
        }
    }
}

impl Drop for WindowsInputCaptureService {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Owns one installed hook; unhooks on drop.
struct InstalledHook(HHOOK);

impl Drop for InstalledHook {
    fn drop(&mut self) {
        // SAFETY: the handle came from a successful SetWindowsHookExW on this
        // thread and is unhooked exactly once.
        if let Err(e) = unsafe { UnhookWindowsHookEx(self.0) } {
            warn!("UnhookWindowsHookEx failed: {e}");
        }
    }
}

/// Entry point for the dedicated hook thread.
fn run_hook_thread(
    sink: UnboundedSender<RawInputEvent>,
    ready: std_mpsc::SyncSender<Result<u32, CaptureError>>,
) {
    let mut msg = MSG::default();

    // SAFETY: GetCurrentThreadId has no preconditions. PeekMessageW forces the
    // creation of this thread's message queue so PostThreadMessageW cannot
    // race ahead of it.
    let thread_id = unsafe {
        let _ = PeekMessageW(&mut msg, None, WM_USER, WM_USER, PM_NOREMOVE);
        GetCurrentThreadId()
    };

    HOOK_SINK.with(|slot| *slot.borrow_mut() = Some(sink));

    let hooks = match install_hooks() {
        Ok(hooks) => hooks,
        Err(e) => {
            HOOK_SINK.with(|slot| slot.borrow_mut().take());
            let _ = ready.send(Err(e));
            return;
        }
    };
    info!("low-level keyboard and mouse hooks installed");
    let _ = ready.send(Ok(thread_id));

    // Win32 message loop – blocks until WM_QUIT is posted
    loop {
        // SAFETY: Standard Win32 GetMessage/DispatchMessage loop pattern.
        let result = unsafe { GetMessageW(&mut msg, None, 0, 0) };
        match result.0 {
            0 => break,
            -1 => {
                error!("GetMessageW failed; leaving hook loop");
                break;
            }
            _ => {
                // SAFETY: msg was filled in by GetMessageW.
                unsafe {
                    DispatchMessageW(&msg);
                }
            }
        }
    }

    drop(hooks);
    HOOK_SINK.with(|slot| slot.borrow_mut().take());
    info!("low-level hooks removed");
}

fn install_hooks() -> Result<(InstalledHook, InstalledHook), CaptureError> {
    // SAFETY: both procedures match HOOKPROC and stay valid for the life of
    // the process. This thread pumps messages, which low-level hooks require.
    let keyboard = unsafe { SetWindowsHookExW(WH_KEYBOARD_LL, Some(keyboard_hook_proc), None, 0) }
        .map(InstalledHook)
        .map_err(|e| CaptureError::KeyboardHookInstallFailed(e.to_string()))?;
    // If this fails the keyboard guard drops and unhooks.
    let mouse = unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(mouse_hook_proc), None, 0) }
        .map(InstalledHook)
        .map_err(|e| CaptureError::MouseHookInstallFailed(e.to_string()))?;
    Ok((keyboard, mouse))
}

/// Posts a decoded event to the controller. Never blocks.
fn forward(event: RawInputEvent) {
    HOOK_SINK.with(|slot| {
        if let Ok(slot) = slot.try_borrow() {
            if let Some(sink) = slot.as_ref() {
                // Ignore send errors (receiver closed during shutdown).
                let _ = sink.send(event);
            }
        }
    });
}

/// Low-level keyboard hook callback.
///
/// # Safety
///
/// This function is called by Windows from the hook message loop thread.
/// It must return quickly to avoid hook removal by the OS.
unsafe extern "system" fn keyboard_hook_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    if n_code == HC_ACTION as i32 && w_param.0 as u32 == WM_KEYDOWN {
        // SAFETY: l_param points to a KBDLLHOOKSTRUCT when n_code == HC_ACTION.
        let kbs = &*(l_param.0 as *const KBDLLHOOKSTRUCT);
        forward(RawInputEvent::KeyDown {
            vk_code: kbs.vkCode as u8,
            time_ms: kbs.time,
        });
    }

    // SAFETY: Forward every event to the next hook in the chain.
    CallNextHookEx(None, n_code, w_param, l_param)
}

/// Low-level mouse hook callback.
///
/// # Safety
///
/// Called by Windows from the hook message loop thread; must return quickly.
unsafe extern "system" fn mouse_hook_proc(
    n_code: i32,
    w_param: WPARAM,
    l_param: LPARAM,
) -> LRESULT {
    if n_code == HC_ACTION as i32 && w_param.0 as u32 == WM_LBUTTONDOWN {
        // SAFETY: l_param points to a MSLLHOOKSTRUCT when n_code == HC_ACTION.
        let mhs = &*(l_param.0 as *const MSLLHOOKSTRUCT);
        forward(RawInputEvent::LeftButtonDown {
            x: mhs.pt.x,
            y: mhs.pt.y,
            time_ms: mhs.time,
        });
    }

    // SAFETY: Forward to the next hook in the chain.
    CallNextHookEx(None, n_code, w_param, l_param)
}
