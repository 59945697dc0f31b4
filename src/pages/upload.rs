use icons::Upload;
use leptos::prelude::*;
use web_sys::{FileList, HtmlInputElement};

use crate::components::hooks::use_random::use_random_id_for;
use crate::components::ui::{Button, ButtonSize, Card, CardContent, Label, Textarea};
use crate::components::{FieldErrors, HeaderView};
use crate::drafts::{UploadDraft, ARCHIVE_EXTENSION, MAX_UPLOAD_MB};

const FILE_ACCEPT: &str = ".zip,image/png,image/jpeg,image/webp,image/gif";
use crate::error::FieldError;
use crate::models::{Category, HeaderConfig, SelectedFile};
use crate::routes::{use_route_title, AppRoute};

const SELECT_CLASS: &str = "upload-select border-input h-10 w-full rounded-md border bg-transparent px-3 text-sm text-muted-foreground shadow-xs outline-none focus-visible:ring-2 focus-visible:ring-ring/50 [&.selected]:text-foreground";

/// Names and sizes of the files in `list`, in selection order.
fn selected_files(list: &FileList) -> Vec<SelectedFile> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|file| SelectedFile::new(file.name(), file.size() as u64))
        .collect()
}

/// Game submission form.
///
/// Genre, description and files are tracked in one [`UploadDraft`] that is
/// dropped with the page. Upload logs the whole draft and lists anything the
/// storage backend would reject; no transport exists yet.
#[component]
pub fn UploadPage() -> impl IntoView {
    use_route_title(|| AppRoute::Upload);

    let draft: RwSignal<UploadDraft> = RwSignal::new(UploadDraft::default());
    let issues: RwSignal<Vec<FieldError>> = RwSignal::new(Vec::new());

    let genre_id = use_random_id_for("genre");
    let description_id = use_random_id_for("description");
    let files_id = use_random_id_for("files");

    let on_genre = move |ev: web_sys::Event| {
        let label = event_target_value(&ev);
        draft.update(|d| d.set_genre_label(&label));
    };

    let on_files = move |ev: web_sys::Event| {
        let input: HtmlInputElement = event_target(&ev);
        let files = input
            .files()
            .map(|list| selected_files(&list))
            .unwrap_or_default();
        log::debug!("{} file(s) selected", files.len());
        draft.update(|d| d.set_files(files));
    };

    let on_upload = move |_| {
        let submission = draft.with_untracked(UploadDraft::submission);
        match serde_json::to_string(&submission) {
            Ok(json) => log::info!("upload draft: {json}"),
            Err(e) => log::error!("could not serialize upload draft: {e}"),
        }

        let found = draft.with_untracked(UploadDraft::validate);
        if !found.is_empty() {
            log::warn!("upload draft has {} issue(s)", found.len());
        }
        issues.set(found);
    };

    let selection_summary = move || {
        draft.with(|d| match d.file_count() {
            0 => "No files selected".to_string(),
            1 => "1 file selected".to_string(),
            n => format!("{n} files selected"),
        })
    };

    view! {
        <div class="upload-container min-h-screen bg-background">
            <HeaderView config=HeaderConfig::auth() />

            <div class="mx-auto w-full max-w-lg px-4 py-10">
                <Card class="upload-form">
                    <CardContent class="flex flex-col gap-4">
                        <div class="flex flex-col gap-2">
                            <Label html_for=genre_id.clone()>"Genre"</Label>
                            <select
                                id=genre_id
                                class=move || {
                                    format!("{} {}", SELECT_CLASS, draft.with(|d| d.genre_state().css_class()))
                                }
                                on:change=on_genre
                            >
                                <option value="" disabled=true hidden=true selected=true>
                                    "game genre"
                                </option>
                                {Category::all()
                                    .into_iter()
                                    .map(|genre| {
                                        view! { <option value=genre.to_string()>{genre.to_string()}</option> }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="flex flex-col gap-2">
                            <Label html_for=description_id.clone()>"Description"</Label>
                            <Textarea
                                id=description_id
                                class="upload-textarea"
                                placeholder="description..."
                                value=Signal::derive(move || draft.with(|d| d.description.clone()))
                                on_input=Callback::new(move |v| draft.update(|d| d.set_description(v)))
                            />
                        </div>

                        <div class="flex flex-col gap-2">
                            <Label html_for=files_id.clone()>"Game files"</Label>
                            <input
                                id=files_id
                                type="file"
                                multiple=true
                                accept=FILE_ACCEPT
                                class="upload-file-input text-sm"
                                on:change=on_files
                            />
                            <p class="upload-selection text-xs text-muted-foreground">
                                {selection_summary}
                                {format!(" · a .{} build plus optional thumbnails, up to {} MB each", ARCHIVE_EXTENSION, MAX_UPLOAD_MB)}
                            </p>
                        </div>

                        <FieldErrors errors=issues />

                        <Button size=ButtonSize::Lg class="upload-btn w-full" on:click=on_upload>
                            <Upload />
                            "Upload"
                        </Button>
                    </CardContent>
                </Card>
            </div>
        </div>
    }
}
