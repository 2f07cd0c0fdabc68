// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Android platform bridge via JNI.
//
// Builds as part of the `cdylib` for `aarch64-linux-android` /
// `armv7-linux-androideabi`. The Java side is a thin shim (see
// `ANDROID-INTEGRATION.md`):
//
//   MainActivity          forwards lifecycle callbacks to the `native*` entry
//                         points below and hands over the bridge's WebView.
//   NativeInsetsListener  `View.OnApplyWindowInsetsListener` whose single
//                         method is implemented natively here.
//   NativeUiDrain         `Runnable` posted through `runOnUiThread` to run
//                         UI jobs queued from other threads.
//
// ## Architecture notes
//
// The activity and the WebView are held as JNI global references. The
// activity is also published through `ndk_context` so other native code in
// the process can reach the Android context. The WebView reference is absent
// until the host bridge has initialised and again after destroy; the reporter
// checks and skips in that window.

#![cfg(target_os = "android")]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::panic::AssertUnwindSafe;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, OnceLock, RwLock};

use jni::objects::{GlobalRef, JClass, JObject, JString, JValue};
use jni::sys::jobject;
use jni::{JNIEnv, JavaVM};

use lokalhunt_core::ShellConfig;
use lokalhunt_core::error::{Result, ShellError};
use lokalhunt_core::types::{ApiLevel, Density, EdgeInsets};
use tracing::{error, info, warn};

use crate::exception::{self, PendingException};
use crate::lifecycle::ShellActivity;
use crate::traits::*;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// `android.R.id.content`.
const ID_CONTENT: i32 = 0x0102_0002;

const WINDOW_INSETS_TYPE: &str = "android/view/WindowInsets$Type";
const LISTENER_CLASS: &str = "com/codevel/lokalhunt/NativeInsetsListener";
const UI_DRAIN_CLASS: &str = "com/codevel/lokalhunt/NativeUiDrain";

// ---------------------------------------------------------------------------
// Process-wide state
// ---------------------------------------------------------------------------

static CONTEXT_READY: AtomicBool = AtomicBool::new(false);
static ACTIVITY: Mutex<Option<GlobalRef>> = Mutex::new(None);
static LISTENER_VIEW: Mutex<Option<GlobalRef>> = Mutex::new(None);
static WEB_VIEW: RwLock<Option<GlobalRef>> = RwLock::new(None);
static UI_QUEUE: Mutex<VecDeque<UiJob>> = Mutex::new(VecDeque::new());
static SHELL: Mutex<Option<ShellActivity<AndroidBridge>>> = Mutex::new(None);

/// `NativeUiDrain`, resolved on the main thread. `FindClass` on a thread
/// attached from native code only sees the system class loader.
static UI_DRAIN: OnceLock<GlobalRef> = OnceLock::new();

// ---------------------------------------------------------------------------
// JNI bootstrap helpers
// ---------------------------------------------------------------------------

/// Install the logcat backend. Only the first call in a process takes
/// effect, so the tag of a recreated activity's config is not picked up.
fn init_logging(tag: &str) {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Debug)
            .with_tag(tag),
    );
}

impl PendingException for JNIEnv<'_> {
    fn exception_pending(&self) -> bool {
        self.exception_check().unwrap_or(false)
    }

    fn describe_and_clear(&self) {
        let _ = self.exception_describe();
        let _ = self.exception_clear();
    }
}

/// Map a failed JNI call into `ShellError::Bridge`, clearing the Java
/// exception it may have raised.
fn jni_err(env: &JNIEnv<'_>, context: &str, e: jni::errors::Error) -> ShellError {
    exception::bridge_error(env, context, e)
}

/// Failures that happen before there is a `JNIEnv` to inspect.
fn vm_err(context: &str, e: jni::errors::Error) -> ShellError {
    ShellError::Bridge(format!("{context}: {e}"))
}

/// Run `f` with a [`JNIEnv`] for the current thread.
///
/// Obtains the `JavaVM*` from `ndk_context` and attaches the current thread
/// if it is not already attached.
fn with_env<T>(f: impl FnOnce(&mut JNIEnv<'_>) -> Result<T>) -> Result<T> {
    if !CONTEXT_READY.load(Ordering::Acquire) {
        return Err(ShellError::Bridge(
            "Android context is not initialised — activity not created".into(),
        ));
    }
    let ctx = ndk_context::android_context();
    // SAFETY: `ctx.vm()` is the `JavaVM*` registered in `nativeOnCreate`,
    // valid for the lifetime of the process.
    let vm = unsafe { JavaVM::from_raw(ctx.vm().cast()) }
        .map_err(|e| vm_err("JavaVM::from_raw", e))?;
    let mut guard = vm
        .attach_current_thread()
        .map_err(|e| vm_err("attach_current_thread", e))?;
    let out = f(&mut guard);
    exception::settle(&*guard, "with_env");
    out
}

/// Clone the global reference to the hosting activity.
fn activity() -> Result<GlobalRef> {
    ACTIVITY
        .lock()
        .expect("activity lock poisoned")
        .clone()
        .ok_or_else(|| ShellError::Bridge("no activity attached".into()))
}

fn api_level(env: &mut JNIEnv<'_>) -> Result<ApiLevel> {
    let sdk = env
        .get_static_field("android/os/Build$VERSION", "SDK_INT", "I")
        .map_err(|e| jni_err(env, "Build.VERSION.SDK_INT", e))?
        .i()
        .map_err(|e| jni_err(env, "SDK_INT->i", e))?;
    Ok(ApiLevel(sdk.max(0) as u32))
}

/// `activity.getFilesDir().getAbsolutePath()`
fn files_dir(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<PathBuf> {
    let dir = env
        .call_method(activity, "getFilesDir", "()Ljava/io/File;", &[])
        .map_err(|e| jni_err(env, "getFilesDir", e))?
        .l()
        .map_err(|e| jni_err(env, "getFilesDir->l", e))?;
    let path = env
        .call_method(&dir, "getAbsolutePath", "()Ljava/lang/String;", &[])
        .map_err(|e| jni_err(env, "getAbsolutePath", e))?
        .l()
        .map_err(|e| jni_err(env, "getAbsolutePath->l", e))?;
    let path: String = env
        .get_string(&JString::from(path))
        .map_err(|e| jni_err(env, "get_string(filesDir)", e))?
        .into();
    Ok(PathBuf::from(path))
}

/// `activity.getWindow()`
fn window<'local>(env: &mut JNIEnv<'local>, activity: &JObject<'_>) -> Result<JObject<'local>> {
    env.call_method(activity, "getWindow", "()Landroid/view/Window;", &[])
        .map_err(|e| jni_err(env, "getWindow", e))?
        .l()
        .map_err(|e| jni_err(env, "getWindow->l", e))
}

/// Read the public `top`/`bottom`/`left`/`right` fields of an
/// `android.graphics.Insets`.
fn read_graphics_insets(env: &mut JNIEnv<'_>, insets: &JObject<'_>) -> Result<EdgeInsets> {
    let mut field = |name: &str| -> Result<i32> {
        env.get_field(insets, name, "I")
            .map_err(|e| jni_err(env, name, e))?
            .i()
            .map_err(|e| jni_err(env, name, e))
    };
    let top = field("top")?;
    let bottom = field("bottom")?;
    let left = field("left")?;
    let right = field("right")?;
    Ok(EdgeInsets::from_signed(top, bottom, left, right))
}

fn on_main_thread(env: &mut JNIEnv<'_>) -> Result<bool> {
    let mine = env
        .call_static_method("android/os/Looper", "myLooper", "()Landroid/os/Looper;", &[])
        .map_err(|e| jni_err(env, "Looper.myLooper", e))?
        .l()
        .map_err(|e| jni_err(env, "myLooper->l", e))?;
    let main = env
        .call_static_method("android/os/Looper", "getMainLooper", "()Landroid/os/Looper;", &[])
        .map_err(|e| jni_err(env, "Looper.getMainLooper", e))?
        .l()
        .map_err(|e| jni_err(env, "getMainLooper->l", e))?;
    env.is_same_object(&mine, &main)
        .map_err(|e| jni_err(env, "is_same_object(looper)", e))
}

/// `activity.runOnUiThread(new NativeUiDrain())`
fn post_ui_drain(env: &mut JNIEnv<'_>) -> Result<()> {
    let class = UI_DRAIN
        .get()
        .ok_or_else(|| ShellError::Bridge("NativeUiDrain class not resolved".into()))?;
    let class: &JClass = class.as_obj().into();
    let runnable = env
        .new_object(class, "()V", &[])
        .map_err(|e| jni_err(env, "new NativeUiDrain", e))?;
    let activity = activity()?;
    env.call_method(
        activity.as_obj(),
        "runOnUiThread",
        "(Ljava/lang/Runnable;)V",
        &[JValue::Object(&runnable)],
    )
    .map_err(|e| jni_err(env, "runOnUiThread", e))?;
    Ok(())
}

fn drain_ui_queue() {
    loop {
        let next = UI_QUEUE.lock().expect("ui queue lock poisoned").pop_front();
        let Some(job) = next else { break };
        job();
    }
}

/// Run `f`, containing any panic so it never unwinds into the JVM and
/// clearing any exception still pending before control returns to Java.
fn guarded<'local>(env: &mut JNIEnv<'local>, entry: &str, f: impl FnOnce(&mut JNIEnv<'local>)) {
    if let Err(panic) = std::panic::catch_unwind(AssertUnwindSafe(|| f(env))) {
        let msg = panic
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| panic.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "unknown panic".into());
        error!(entry, panic = %msg, "panic in JNI entry point");
    }
    exception::settle(&*env, entry);
}

// ---------------------------------------------------------------------------
// Bridge struct
// ---------------------------------------------------------------------------

/// Android implementation of the shell bridge.
///
/// Only the API level is cached (it cannot change while the process lives);
/// every other query goes through JNI at call time.
pub struct AndroidBridge {
    api_level: ApiLevel,
}

impl AndroidBridge {
    pub fn new(api_level: ApiLevel) -> Self {
        Self { api_level }
    }
}

impl PlatformBridge for AndroidBridge {
    fn platform_name(&self) -> &str {
        "Android"
    }

    fn api_level(&self) -> ApiLevel {
        self.api_level
    }
}

// ---------------------------------------------------------------------------
// DisplayMetrics — Resources.getDisplayMetrics().density
// ---------------------------------------------------------------------------

impl DisplayMetrics for AndroidBridge {
    fn density(&self) -> Result<Density> {
        let activity = activity()?;
        with_env(|env| {
            let resources = env
                .call_method(
                    activity.as_obj(),
                    "getResources",
                    "()Landroid/content/res/Resources;",
                    &[],
                )
                .map_err(|e| jni_err(env, "getResources", e))?
                .l()
                .map_err(|e| jni_err(env, "getResources->l", e))?;
            let metrics = env
                .call_method(
                    &resources,
                    "getDisplayMetrics",
                    "()Landroid/util/DisplayMetrics;",
                    &[],
                )
                .map_err(|e| jni_err(env, "getDisplayMetrics", e))?
                .l()
                .map_err(|e| jni_err(env, "getDisplayMetrics->l", e))?;
            let density = env
                .get_field(&metrics, "density", "F")
                .map_err(|e| jni_err(env, "DisplayMetrics.density", e))?
                .f()
                .map_err(|e| jni_err(env, "density->f", e))?;
            Density::new(density)
        })
    }
}

// ---------------------------------------------------------------------------
// UiDispatcher — main Looper check, runOnUiThread otherwise
// ---------------------------------------------------------------------------

impl UiDispatcher for AndroidBridge {
    fn run_on_ui_thread(&self, job: UiJob) {
        match with_env(on_main_thread) {
            Ok(true) => job(),
            Ok(false) => {
                UI_QUEUE
                    .lock()
                    .expect("ui queue lock poisoned")
                    .push_back(job);
                if let Err(e) = with_env(post_ui_drain) {
                    warn!(error = %e, "could not post UI job");
                }
            }
            Err(e) => warn!(error = %e, "UI thread unavailable, job dropped"),
        }
    }
}

// ---------------------------------------------------------------------------
// BridgeHandle — WebView.evaluateJavascript
// ---------------------------------------------------------------------------

/// The host bridge's WebView.
struct WebViewSink {
    web_view: GlobalRef,
}

impl ScriptSink for WebViewSink {
    fn evaluate_script(&self, js: &str) -> Result<()> {
        with_env(|env| {
            let j_js: JString = env
                .new_string(js)
                .map_err(|e| jni_err(env, "new_string(js)", e))?;
            env.call_method(
                self.web_view.as_obj(),
                "evaluateJavascript",
                "(Ljava/lang/String;Landroid/webkit/ValueCallback;)V",
                &[JValue::Object(&j_js), JValue::Object(&JObject::null())],
            )
            .map_err(|e| jni_err(env, "WebView.evaluateJavascript", e))?;
            Ok(())
        })
    }
}

impl BridgeHandle for AndroidBridge {
    fn script_sink(&self) -> Option<Arc<dyn ScriptSink>> {
        let web_view = WEB_VIEW.read().expect("web view lock poisoned").clone()?;
        Some(Arc::new(WebViewSink { web_view }))
    }
}

// ---------------------------------------------------------------------------
// WindowHost — Window / View setup
// ---------------------------------------------------------------------------

impl WindowHost for AndroidBridge {
    fn set_decor_fits_system_windows(&self, fits: bool) -> Result<()> {
        let activity = activity()?;
        with_env(|env| {
            let window = window(env, activity.as_obj())?;
            env.call_method(
                &window,
                "setDecorFitsSystemWindows",
                "(Z)V",
                &[JValue::Bool(fits.into())],
            )
            .map_err(|e| jni_err(env, "setDecorFitsSystemWindows", e))?;
            Ok(())
        })
    }

    fn attach_insets_listener(&self, target: ListenerTarget) -> Result<()> {
        let activity = activity()?;
        let view = with_env(|env| {
            let view = match target {
                ListenerTarget::ContentRoot => env
                    .call_method(
                        activity.as_obj(),
                        "findViewById",
                        "(I)Landroid/view/View;",
                        &[JValue::Int(ID_CONTENT)],
                    )
                    .map_err(|e| jni_err(env, "findViewById(content)", e))?
                    .l()
                    .map_err(|e| jni_err(env, "findViewById->l", e))?,
                ListenerTarget::DecorView => {
                    let window = window(env, activity.as_obj())?;
                    env.call_method(&window, "getDecorView", "()Landroid/view/View;", &[])
                        .map_err(|e| jni_err(env, "getDecorView", e))?
                        .l()
                        .map_err(|e| jni_err(env, "getDecorView->l", e))?
                }
            };
            if view.is_null() {
                return Err(ShellError::Bridge(format!("{target:?} view is null")));
            }

            let listener = env
                .new_object(LISTENER_CLASS, "()V", &[])
                .map_err(|e| jni_err(env, "new NativeInsetsListener", e))?;
            env.call_method(
                &view,
                "setOnApplyWindowInsetsListener",
                "(Landroid/view/View$OnApplyWindowInsetsListener;)V",
                &[JValue::Object(&listener)],
            )
            .map_err(|e| jni_err(env, "setOnApplyWindowInsetsListener", e))?;

            env.new_global_ref(&view)
                .map_err(|e| jni_err(env, "new_global_ref(view)", e))
        })?;

        *LISTENER_VIEW.lock().expect("listener view lock poisoned") = Some(view);
        Ok(())
    }

    fn request_apply_insets(&self) -> Result<()> {
        let view = LISTENER_VIEW
            .lock()
            .expect("listener view lock poisoned")
            .clone()
            .ok_or_else(|| ShellError::Bridge("no listener view".into()))?;
        with_env(|env| {
            env.call_method(view.as_obj(), "requestApplyInsets", "()V", &[])
                .map_err(|e| jni_err(env, "requestApplyInsets", e))?;
            Ok(())
        })
    }
}

// ---------------------------------------------------------------------------
// WindowInsetsSource — android.view.WindowInsets
// ---------------------------------------------------------------------------

/// A `WindowInsets` object received by the native listener.
struct JniWindowInsets<'a, 'local> {
    env: RefCell<&'a mut JNIEnv<'local>>,
    insets: JObject<'local>,
}

impl JniWindowInsets<'_, '_> {
    /// `insets.getInsets(WindowInsets.Type.<type_method>())`
    fn typed(&self, type_method: &str) -> Result<EdgeInsets> {
        let mut guard = self.env.borrow_mut();
        let env: &mut JNIEnv<'_> = &mut guard;
        let mask = env
            .call_static_method(WINDOW_INSETS_TYPE, type_method, "()I", &[])
            .map_err(|e| jni_err(env, type_method, e))?
            .i()
            .map_err(|e| jni_err(env, type_method, e))?;
        let insets = env
            .call_method(
                &self.insets,
                "getInsets",
                "(I)Landroid/graphics/Insets;",
                &[JValue::Int(mask)],
            )
            .map_err(|e| jni_err(env, "WindowInsets.getInsets", e))?
            .l()
            .map_err(|e| jni_err(env, "getInsets->l", e))?;
        read_graphics_insets(env, &insets)
    }

    fn int_getter(&self, method: &str) -> Result<i32> {
        let mut guard = self.env.borrow_mut();
        let env: &mut JNIEnv<'_> = &mut guard;
        env.call_method(&self.insets, method, "()I", &[])
            .map_err(|e| jni_err(env, method, e))?
            .i()
            .map_err(|e| jni_err(env, method, e))
    }
}

impl WindowInsetsSource for JniWindowInsets<'_, '_> {
    fn system_bars(&self) -> Result<EdgeInsets> {
        self.typed("systemBars")
    }

    fn display_cutout(&self) -> Result<EdgeInsets> {
        self.typed("displayCutout")
    }

    fn system_window(&self) -> Result<EdgeInsets> {
        Ok(EdgeInsets::from_signed(
            self.int_getter("getSystemWindowInsetTop")?,
            self.int_getter("getSystemWindowInsetBottom")?,
            self.int_getter("getSystemWindowInsetLeft")?,
            self.int_getter("getSystemWindowInsetRight")?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Lifecycle
// ---------------------------------------------------------------------------

fn create(env: &mut JNIEnv<'_>, activity: &JObject<'_>) -> Result<()> {
    // The logger's tag comes from the config, so nothing can be logged until
    // the config has been read.
    let (config, load_error) = match files_dir(env, activity) {
        Ok(dir) => ShellConfig::load_quietly(&dir),
        Err(e) => (ShellConfig::default(), Some(e)),
    };
    init_logging(&config.log_tag);
    if let Some(e) = load_error {
        warn!(error = %e, "config unusable, using defaults");
    }

    let activity_ref = env
        .new_global_ref(activity)
        .map_err(|e| jni_err(env, "new_global_ref(activity)", e))?;
    let vm = env.get_java_vm().map_err(|e| jni_err(env, "get_java_vm", e))?;

    // A recreated activity (e.g. after a configuration change) replaces the
    // previous context.
    release_context();
    // SAFETY: both pointers stay valid while `activity_ref` is held in
    // `ACTIVITY`; `release_context` unregisters them before it is dropped.
    unsafe {
        ndk_context::initialize_android_context(
            vm.get_java_vm_pointer().cast(),
            activity_ref.as_obj().as_raw().cast(),
        );
    }
    *ACTIVITY.lock().expect("activity lock poisoned") = Some(activity_ref);
    CONTEXT_READY.store(true, Ordering::Release);

    if UI_DRAIN.get().is_none() {
        let class = env
            .find_class(UI_DRAIN_CLASS)
            .map_err(|e| jni_err(env, "find_class(NativeUiDrain)", e))?;
        let class = env
            .new_global_ref(class)
            .map_err(|e| jni_err(env, "new_global_ref(NativeUiDrain)", e))?;
        let _ = UI_DRAIN.set(class);
    }

    let bridge = Arc::new(AndroidBridge::new(api_level(env)?));
    let mut shell = ShellActivity::new(bridge, config);
    shell.on_create()?;

    *SHELL.lock().expect("shell lock poisoned") = Some(shell);
    Ok(())
}

fn release_context() {
    if CONTEXT_READY.swap(false, Ordering::AcqRel) {
        // SAFETY: the context was registered by `create` and not yet released.
        unsafe { ndk_context::release_android_context() };
    }
    *ACTIVITY.lock().expect("activity lock poisoned") = None;
}

fn with_shell(f: impl FnOnce(&mut ShellActivity<AndroidBridge>)) {
    if let Some(shell) = SHELL.lock().expect("shell lock poisoned").as_mut() {
        f(shell);
    }
}

// ---------------------------------------------------------------------------
// JNI entry points — com.codevel.lokalhunt.MainActivity
// ---------------------------------------------------------------------------

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_MainActivity_nativeOnCreate<'local>(
    mut env: JNIEnv<'local>,
    activity: JObject<'local>,
) {
    guarded(&mut env, "nativeOnCreate", |env| {
        if let Err(e) = create(env, &activity) {
            error!(error = %e, "inset detection setup failed");
        }
    });
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_MainActivity_nativeOnStart<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
) {
    guarded(&mut env, "nativeOnStart", |_| with_shell(|s| s.on_start()));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_MainActivity_nativeOnResume<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
) {
    guarded(&mut env, "nativeOnResume", |_| with_shell(|s| s.on_resume()));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_MainActivity_nativeOnPause<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
) {
    guarded(&mut env, "nativeOnPause", |_| with_shell(|s| s.on_pause()));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_MainActivity_nativeOnStop<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
) {
    guarded(&mut env, "nativeOnStop", |_| with_shell(|s| s.on_stop()));
}

#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_MainActivity_nativeOnDestroy<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
) {
    guarded(&mut env, "nativeOnDestroy", |_| {
        let shell = SHELL.lock().expect("shell lock poisoned").take();
        if let Some(mut shell) = shell {
            shell.on_destroy();
        }
        *WEB_VIEW.write().expect("web view lock poisoned") = None;
        *LISTENER_VIEW.lock().expect("listener view lock poisoned") = None;
        UI_QUEUE.lock().expect("ui queue lock poisoned").clear();
        release_context();
    });
}

/// Called by the host once its bridge has created the WebView.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_MainActivity_nativeAttachWebView<'local>(
    mut env: JNIEnv<'local>,
    _activity: JObject<'local>,
    web_view: JObject<'local>,
) {
    guarded(&mut env, "nativeAttachWebView", |env| {
        if web_view.is_null() {
            *WEB_VIEW.write().expect("web view lock poisoned") = None;
            return;
        }
        match env.new_global_ref(&web_view) {
            Ok(global) => {
                *WEB_VIEW.write().expect("web view lock poisoned") = Some(global);
                info!("WebView attached");
            }
            Err(e) => error!(error = %e, "could not pin WebView"),
        }
    });
}

// ---------------------------------------------------------------------------
// JNI entry points — listener and UI drain
// ---------------------------------------------------------------------------

/// `NativeInsetsListener.onApplyWindowInsets(View, WindowInsets)`.
///
/// Returns the incoming `WindowInsets` untouched whatever happens.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_NativeInsetsListener_onApplyWindowInsets<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    _view: JObject<'local>,
    insets: JObject<'local>,
) -> jobject {
    let raw = insets.as_raw();
    guarded(&mut env, "onApplyWindowInsets", |env| {
        let event = JniWindowInsets {
            env: RefCell::new(env),
            insets,
        };
        with_shell(|s| {
            s.on_apply_window_insets(&event);
        });
    });
    raw
}

/// `NativeUiDrain.run()`, executed on the main thread.
#[unsafe(no_mangle)]
pub extern "system" fn Java_com_codevel_lokalhunt_NativeUiDrain_run<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    guarded(&mut env, "NativeUiDrain.run", |_| drain_ui_queue());
}
