use chrono::{DateTime, Utc};
use gloo_timers::future::TimeoutFuture;
use log::{debug, error, info};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::Uint8Array;
use web_sys::{File, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::analysis::{
    self, AnalysisDetail, AnalysisError, AnalysisInput, AnalysisResult, ScoreTier,
};
use crate::config;
use crate::data::SAMPLE_TEXTS;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Text,
    Image,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Analyzing,
    ShowingResult(AnalysisResult),
}

#[derive(Debug, Clone, PartialEq)]
pub struct StagedImage {
    pub name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

/// Input and phase of the demo, kept apart from the DOM.
///
/// Every analysis gets a run id; a finished analysis whose id is no longer
/// current (the user reset or switched modes meanwhile) is dropped. File
/// reads carry an upload generation the same way.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoState {
    pub mode: Mode,
    pub text: String,
    pub image: Option<StagedImage>,
    pub phase: Phase,
    pub error: Option<String>,
    run: u32,
    upload: u32,
}

impl Default for DemoState {
    fn default() -> Self {
        DemoState {
            mode: Mode::Text,
            text: String::new(),
            image: None,
            phase: Phase::Idle,
            error: None,
            run: 0,
            upload: 0,
        }
    }
}

impl DemoState {
    pub fn is_analyzing(&self) -> bool {
        self.phase == Phase::Analyzing
    }

    pub fn can_submit(&self) -> bool {
        if self.is_analyzing() {
            return false;
        }
        match self.mode {
            Mode::Text => !self.text.trim().is_empty(),
            Mode::Image => self.image.is_some(),
        }
    }

    /// Switching modes drops both staged inputs along with any result.
    pub fn set_mode(&mut self, mode: Mode) {
        if self.mode == mode {
            return;
        }
        self.mode = mode;
        self.clear_inputs();
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
        self.error = None;
    }

    /// Generation to hand to a file read; bumped whenever inputs are cleared.
    pub fn upload_generation(&self) -> u32 {
        self.upload
    }

    /// Returns false when the read was started before the last reset.
    pub fn stage_image(&mut self, upload: u32, image: Option<StagedImage>) -> bool {
        if upload != self.upload || self.mode != Mode::Image {
            return false;
        }
        self.image = image;
        self.error = None;
        true
    }

    /// "New Analysis": back to an empty, idle demo.
    pub fn clear_inputs(&mut self) {
        self.text.clear();
        self.image = None;
        self.upload += 1;
        self.abandon();
    }

    pub fn fail(&mut self, message: String) {
        self.abandon();
        self.error = Some(message);
    }

    /// Moves to `Analyzing` and hands back the input to analyze.
    pub fn begin(&mut self) -> Option<(u32, AnalysisInput)> {
        if !self.can_submit() {
            return None;
        }
        let input = match self.mode {
            Mode::Text => AnalysisInput::Text(self.text.clone()),
            Mode::Image => {
                let image = self.image.clone()?;
                AnalysisInput::Image {
                    name: image.name,
                    mime: image.mime,
                    bytes: image.bytes,
                }
            }
        };
        self.run += 1;
        self.phase = Phase::Analyzing;
        self.error = None;
        Some((self.run, input))
    }

    /// Returns false when the outcome belongs to an abandoned run.
    pub fn finish(&mut self, run: u32, outcome: Result<AnalysisResult, AnalysisError>) -> bool {
        if run != self.run || !self.is_analyzing() {
            return false;
        }
        match outcome {
            Ok(result) => self.phase = Phase::ShowingResult(result),
            Err(e) => {
                self.phase = Phase::Idle;
                self.error = Some(e.to_string());
            }
        }
        true
    }

    fn abandon(&mut self) {
        self.run += 1;
        self.phase = Phase::Idle;
        self.error = None;
    }
}

pub enum AnalysisDemoMsg {
    SetMode(Mode),
    SetText(String),
    UseSample(usize),
    FileChosen(Option<File>),
    FileLoaded {
        upload: u32,
        image: StagedImage,
    },
    FileFailed {
        upload: u32,
        reason: String,
    },
    Analyze,
    Finished {
        run: u32,
        outcome: Result<AnalysisResult, AnalysisError>,
    },
    NewAnalysis,
}

pub struct AnalysisDemo {
    state: DemoState,
    started_at: Option<DateTime<Utc>>,
    elapsed_ms: Option<i64>,
}

async fn read_file(file: &File) -> Result<Vec<u8>, String> {
    let buffer = JsFuture::from(file.array_buffer())
        .await
        .map_err(|e| format!("{:?}", e))?;
    Ok(Uint8Array::new(&buffer).to_vec())
}

impl Component for AnalysisDemo {
    type Message = AnalysisDemoMsg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            state: DemoState::default(),
            started_at: None,
            elapsed_ms: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            AnalysisDemoMsg::SetMode(mode) => {
                self.state.set_mode(mode);
                true
            }
            AnalysisDemoMsg::SetText(text) => {
                self.state.set_text(text);
                true
            }
            AnalysisDemoMsg::UseSample(index) => {
                if let Some(sample) = SAMPLE_TEXTS.get(index) {
                    self.state.set_text(sample.to_string());
                }
                true
            }
            AnalysisDemoMsg::FileChosen(None) => {
                let upload = self.state.upload_generation();
                self.state.stage_image(upload, None);
                true
            }
            AnalysisDemoMsg::FileChosen(Some(file)) => {
                let upload = self.state.upload_generation();
                if let Err(e) = analysis::image::check_size(file.size() as usize, config::MAX_IMAGE_BYTES) {
                    self.state.stage_image(upload, None);
                    self.state.error = Some(e.to_string());
                    return true;
                }
                ctx.link().send_future(async move {
                    match read_file(&file).await {
                        Ok(bytes) => AnalysisDemoMsg::FileLoaded {
                            upload,
                            image: StagedImage {
                                name: file.name(),
                                mime: file.type_(),
                                bytes,
                            },
                        },
                        Err(reason) => AnalysisDemoMsg::FileFailed { upload, reason },
                    }
                });
                false
            }
            AnalysisDemoMsg::FileLoaded { upload, image } => {
                let name = image.name.clone();
                let len = image.bytes.len();
                if !self.state.stage_image(upload, Some(image)) {
                    debug!("Dropping stale read of {}", name);
                    return false;
                }
                debug!("Staged {} ({} bytes)", name, len);
                true
            }
            AnalysisDemoMsg::FileFailed { upload, reason } => {
                error!("Failed to read selected file: {}", reason);
                if upload != self.state.upload_generation() {
                    return false;
                }
                self.state.fail("Could not read the selected file".to_string());
                true
            }
            AnalysisDemoMsg::Analyze => {
                let Some((run, input)) = self.state.begin() else {
                    return false;
                };
                self.started_at = Some(Utc::now());
                self.elapsed_ms = None;
                ctx.link().send_future(async move {
                    TimeoutFuture::new(config::SIMULATED_LATENCY_MS).await;
                    AnalysisDemoMsg::Finished {
                        run,
                        outcome: analysis::analyze(&input),
                    }
                });
                true
            }
            AnalysisDemoMsg::Finished { run, outcome } => {
                if !self.state.finish(run, outcome) {
                    debug!("Dropping result of abandoned run {}", run);
                    return false;
                }
                if let Phase::ShowingResult(result) = &self.state.phase {
                    info!("Analysis finished: {} scored {}", result.category, result.credibility_score);
                    if let Ok(json) = serde_json::to_string(result) {
                        debug!("Analysis result: {}", json);
                    }
                }
                self.elapsed_ms = self
                    .started_at
                    .take()
                    .map(|started| (Utc::now() - started).num_milliseconds());
                true
            }
            AnalysisDemoMsg::NewAnalysis => {
                self.state.clear_inputs();
                self.started_at = None;
                self.elapsed_ms = None;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let state = &self.state;

        let mode_button = |mode: Mode, label: &'static str| {
            html! {
                <button
                    class={classes!("mode-button", (state.mode == mode).then(|| "active"))}
                    onclick={link.callback(move |_| AnalysisDemoMsg::SetMode(mode))}
                    disabled={state.is_analyzing()}
                >
                    {label}
                </button>
            }
        };

        let input_area = match state.mode {
            Mode::Text => html! {
                <>
                    <textarea
                        class="demo-textarea"
                        placeholder="Paste the text content you want to analyze..."
                        value={state.text.clone()}
                        disabled={state.is_analyzing()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlTextAreaElement = e.target_unchecked_into();
                            AnalysisDemoMsg::SetText(input.value())
                        })}
                    />
                    <div class="sample-row">
                        <span>{"Try these samples:"}</span>
                        { for (0..SAMPLE_TEXTS.len()).map(|index| html! {
                            <button
                                class="button button-small button-outline"
                                onclick={link.callback(move |_| AnalysisDemoMsg::UseSample(index))}
                                disabled={state.is_analyzing()}
                            >
                                {format!("Sample {}", index + 1)}
                            </button>
                        }) }
                    </div>
                </>
            },
            Mode::Image => html! {
                <div class="upload-area">
                    // Remounted on reset so the native control forgets the old file
                    <input
                        key={state.upload_generation().to_string()}
                        type="file"
                        accept="image/*"
                        disabled={state.is_analyzing()}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            AnalysisDemoMsg::FileChosen(input.files().and_then(|files| files.get(0)))
                        })}
                    />
                    {
                        if let Some(image) = &state.image {
                            html! { <p class="upload-name">{format!("{} ({} KB)", image.name, image.bytes.len() / 1024)}</p> }
                        } else {
                            html! { <p class="upload-name">{"PNG, JPEG, GIF, WebP or BMP up to 10 MB"}</p> }
                        }
                    }
                </div>
            },
        };

        let analyze_label = if state.is_analyzing() {
            html! { <><span class="spinner"></span>{"Analyzing Content..."}</> }
        } else {
            html! { {"Analyze Content"} }
        };

        html! {
            <div class="analysis-demo">
                <div class="card">
                    <h3 class="card-title">{"Content Analysis"}</h3>
                    <p class="card-description">
                        {"Paste any text content or upload an image to see our AI credibility analysis"}
                    </p>
                    <div class="mode-toggle">
                        { mode_button(Mode::Text, "Text") }
                        { mode_button(Mode::Image, "Image") }
                    </div>
                    { input_area }
                    {
                        if let Some(message) = &state.error {
                            html! { <div class="demo-error">{message}</div> }
                        } else {
                            html! {}
                        }
                    }
                    <button
                        class="button button-primary button-full"
                        onclick={link.callback(|_| AnalysisDemoMsg::Analyze)}
                        disabled={!state.can_submit()}
                    >
                        { analyze_label }
                    </button>
                </div>
                {
                    if let Phase::ShowingResult(result) = &state.phase {
                        render_result(result, self.elapsed_ms, link.callback(|_| AnalysisDemoMsg::NewAnalysis))
                    } else {
                        html! {}
                    }
                }
                <style>
                    {r#"
                    .mode-toggle {
                        display: inline-flex;
                        border: 1px solid #e5e7eb;
                        border-radius: 0.5rem;
                        overflow: hidden;
                        margin-bottom: 1rem;
                    }
                    .mode-button {
                        padding: 0.5rem 1.25rem;
                        background: white;
                        border: none;
                        cursor: pointer;
                    }
                    .mode-button.active {
                        background: #2563eb;
                        color: white;
                    }
                    .demo-textarea {
                        width: 100%;
                        min-height: 120px;
                        padding: 0.75rem;
                        border: 1px solid #d1d5db;
                        border-radius: 0.5rem;
                        font: inherit;
                        box-sizing: border-box;
                    }
                    .sample-row {
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        gap: 0.5rem;
                        margin: 1rem 0;
                        font-size: 0.875rem;
                        color: #4b5563;
                    }
                    .upload-area {
                        border: 2px dashed #d1d5db;
                        border-radius: 0.5rem;
                        padding: 2rem;
                        text-align: center;
                        margin-bottom: 1rem;
                    }
                    .upload-name {
                        font-size: 0.875rem;
                        color: #6b7280;
                    }
                    .demo-error {
                        background: #fef2f2;
                        color: #b91c1c;
                        border-radius: 0.375rem;
                        padding: 0.5rem 0.75rem;
                        margin-bottom: 1rem;
                        font-size: 0.875rem;
                    }
                    .spinner {
                        display: inline-block;
                        width: 1rem;
                        height: 1rem;
                        margin-right: 0.5rem;
                        border: 2px solid rgba(255, 255, 255, 0.4);
                        border-top-color: white;
                        border-radius: 50%;
                        animation: spin 0.8s linear infinite;
                        vertical-align: middle;
                    }
                    @keyframes spin {
                        to { transform: rotate(360deg); }
                    }
                    .result-card {
                        margin-top: 1.5rem;
                        animation: fadeIn 0.5s ease-in-out;
                    }
                    @keyframes fadeIn {
                        from { opacity: 0; transform: translateY(10px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .result-score {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        margin-bottom: 0.5rem;
                    }
                    .result-score-value {
                        font-size: 1.5rem;
                        font-weight: bold;
                    }
                    .result-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 1rem;
                        margin: 1.5rem 0;
                    }
                    .flag-item {
                        display: flex;
                        gap: 0.5rem;
                        padding: 0.5rem;
                        background: #fefce8;
                        color: #854d0e;
                        border-radius: 0.375rem;
                        margin-bottom: 0.5rem;
                        font-size: 0.875rem;
                    }
                    .placeholder-notice {
                        background: #eff6ff;
                        color: #1e40af;
                        border-radius: 0.375rem;
                        padding: 0.75rem;
                        font-size: 0.875rem;
                    }
                    .result-footer {
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        border-top: 1px solid #e5e7eb;
                        margin-top: 1.5rem;
                        padding-top: 1rem;
                        font-size: 0.75rem;
                        color: #6b7280;
                    }
                    "#}
                </style>
            </div>
        }
    }
}

fn render_detail(detail: &AnalysisDetail) -> Html {
    match detail {
        AnalysisDetail::Text(text) => html! {
            <div class="result-grid">
                <div>
                    <h4>{"Structure"}</h4>
                    <p class="card-description">
                        {format!("{} words in {} sentences", text.word_count, text.sentence_count)}
                    </p>
                </div>
                <div>
                    <h4>{"Readability"}</h4>
                    <p class="card-description">{format!("{}/100", text.readability_score)}</p>
                </div>
            </div>
        },
        AnalysisDetail::Image(image) => html! {
            <div class="placeholder-notice">
                {format!("{} image, {} bytes. ", image.format.label(), image.byte_len)}
                {
                    if image.is_placeholder() {
                        "Deepfake, manipulation and originality checks are not available in this demo."
                    } else {
                        ""
                    }
                }
            </div>
        },
    }
}

fn render_result(result: &AnalysisResult, elapsed_ms: Option<i64>, on_new: Callback<MouseEvent>) -> Html {
    let tier = ScoreTier::from_score(result.credibility_score);
    let is_placeholder = matches!(&result.detail, AnalysisDetail::Image(image) if image.is_placeholder());
    let elapsed = elapsed_ms
        .map(|ms| format!("Analysis completed in {:.1} seconds", ms as f64 / 1000.0))
        .unwrap_or_default();

    html! {
        <div class="card result-card">
            <h3 class="card-title">
                {
                    if is_placeholder {
                        html! { {"ℹ Image Received"} }
                    } else {
                        html! { <><span class={tier.color_class()}>{tier.icon()}</span>{" Analysis Results"}</> }
                    }
                }
            </h3>
            {
                if is_placeholder {
                    html! {}
                } else {
                    html! {
                        <>
                            <div class="result-score">
                                <span>{"Credibility Score"}</span>
                                <span class={classes!("result-score-value", tier.color_class())}>
                                    {format!("{}%", result.credibility_score)}
                                </span>
                            </div>
                            <div class="progress">
                                <div
                                    class={classes!("progress-fill", tier.fill_class())}
                                    style={format!("width: {}%;", result.credibility_score)}
                                ></div>
                            </div>
                            <div class="result-grid">
                                <div>
                                    <h4>{"Source Verification"}</h4>
                                    <p class="card-description">
                                        {format!("Cross-referenced with {} trusted sources", result.sources)}
                                    </p>
                                </div>
                                <div>
                                    <h4>{"Content Category"}</h4>
                                    <span class="badge badge-gray">{&result.category}</span>
                                </div>
                            </div>
                        </>
                    }
                }
            }
            {
                if result.flags.is_empty() {
                    html! {}
                } else {
                    html! {
                        <div>
                            <h4 class="flags-heading">{"Detection Flags"}</h4>
                            { for result.flags.iter().map(|flag| html! {
                                <div class="flag-item"><span>{"⚠"}</span><span>{flag}</span></div>
                            }) }
                        </div>
                    }
                }
            }
            { render_detail(&result.detail) }
            <div class="result-footer">
                <span>{elapsed}{format!(" • Powered by {}", config::PRODUCT_NAME)}</span>
                <button class="button button-small button-outline" onclick={on_new}>{"New Analysis"}</button>
            </div>
        </div>
    }
}
