//! File ingestion: native pickers, data-URI encoding for storage inside block
//! content, and decoding back to displayable images.

use super::*;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use rfd::FileDialog;
use std::collections::HashSet;

pub const IMAGE_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "webp", "gif", "svg", "bmp", "tif", "tiff",
];
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "mov", "mkv", "avi"];

pub fn mime_for_extension(ext: &str) -> &'static str {
    match ext.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "webp" => "image/webp",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "bmp" => "image/bmp",
        "tif" | "tiff" => "image/tiff",
        "mp4" => "video/mp4",
        "webm" => "video/webm",
        "mov" => "video/quicktime",
        "mkv" => "video/x-matroska",
        "avi" => "video/x-msvideo",
        "mp3" => "audio/mpeg",
        "m4a" => "audio/mp4",
        "ogg" => "audio/ogg",
        "wav" => "audio/wav",
        "flac" => "audio/flac",
        _ => "application/octet-stream",
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(mime_for_extension)
        .unwrap_or("application/octet-stream")
}

pub fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", BASE64.encode(bytes))
}

pub fn image_format_for_mime(mime: &str) -> Option<gpui::ImageFormat> {
    match mime {
        "image/png" => Some(gpui::ImageFormat::Png),
        "image/jpeg" => Some(gpui::ImageFormat::Jpeg),
        "image/webp" => Some(gpui::ImageFormat::Webp),
        "image/gif" => Some(gpui::ImageFormat::Gif),
        "image/svg+xml" => Some(gpui::ImageFormat::Svg),
        "image/bmp" => Some(gpui::ImageFormat::Bmp),
        "image/tiff" => Some(gpui::ImageFormat::Tiff),
        _ => None,
    }
}

/// Splits a `data:<mime>;base64,<payload>` string back into a displayable
/// image format and raw bytes. Non-image mimes and malformed URIs yield None.
pub fn decode_data_uri(uri: &str) -> Option<(gpui::ImageFormat, Vec<u8>)> {
    let rest = uri.strip_prefix("data:")?;
    let (mime, payload) = rest.split_once(";base64,")?;
    let format = image_format_for_mime(mime)?;
    let bytes = BASE64.decode(payload).ok()?;
    Some((format, bytes))
}

pub fn read_as_data_uri(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)?;
    Ok(encode_data_uri(mime_for_path(path), &bytes))
}

/// Reads a batch of files in the given order. Unreadable files are skipped
/// with a warning and do not disturb the order of the rest.
pub fn read_batch_as_data_uris(paths: &[PathBuf]) -> Vec<String> {
    let mut uris = Vec::with_capacity(paths.len());
    for path in paths {
        match read_as_data_uri(path) {
            Ok(uri) => uris.push(uri),
            Err(err) => {
                tracing::warn!(path = %path.display(), error = %err, "skipping unreadable file");
            }
        }
    }
    uris
}

impl AppStore {
    /// Returns the decoded image for a stored url, decoding data URIs on
    /// first sight. Remote urls are never fetched.
    pub(crate) fn cached_image(&mut self, url: &str) -> Option<Arc<gpui::Image>> {
        if let Some(image) = self.ui.image_cache.get(url) {
            return Some(image.clone());
        }
        if self.ui.failed_decodes.contains(url) || !url.starts_with("data:") {
            return None;
        }
        match decode_data_uri(url) {
            Some((format, bytes)) => {
                let image = Arc::new(gpui::Image::from_bytes(format, bytes));
                self.ui.image_cache.insert(url.to_string(), image.clone());
                Some(image)
            }
            None => {
                tracing::warn!("failed to decode stored data URI");
                self.ui.failed_decodes.insert(url.to_string());
                None
            }
        }
    }

    /// Drops cache entries whose url no longer appears in any block.
    pub(crate) fn prune_media_caches(&mut self) {
        let live: HashSet<&str> = self.page.model.media_urls().into_iter().collect();
        self.ui.image_cache.retain(|url, _| live.contains(url.as_str()));
        self.ui.failed_decodes.retain(|url| live.contains(url.as_str()));
    }

    fn cache_data_uri(&mut self, uri: &str) {
        if let Some((format, bytes)) = decode_data_uri(uri) {
            self.ui
                .image_cache
                .insert(uri.to_string(), Arc::new(gpui::Image::from_bytes(format, bytes)));
        }
    }

    /// Merges an ingested data URI into the target block's url, preserving
    /// every other field. No-op when the block is gone or has no url field.
    fn merge_url(&mut self, id: &BlockId, uri: String, cx: &mut Context<Self>) {
        let Some(block) = self.page.model.block(id) else {
            return;
        };
        let next = match &block.content {
            BlockContent::Image { caption, .. } => BlockContent::Image {
                url: uri,
                caption: caption.clone(),
            },
            BlockContent::Video { title, .. } => BlockContent::Video {
                url: uri,
                title: title.clone(),
            },
            BlockContent::Music { title, .. } => BlockContent::Music {
                url: uri,
                title: title.clone(),
            },
            _ => return,
        };
        self.commit_content_for_ingest(id, next, cx);
    }

    fn commit_content_for_ingest(
        &mut self,
        id: &BlockId,
        content: BlockContent,
        cx: &mut Context<Self>,
    ) {
        if self.page.model.replace_content(id, content) {
            self.ui.editor_dirty = true;
            tracing::debug!(id = %id, "ingested file merged into block");
            cx.notify();
        }
    }

    pub(crate) fn pick_image_for_block(&mut self, id: BlockId, cx: &mut Context<Self>) {
        let Some(path) = pick_single_file("Images", IMAGE_EXTENSIONS) else {
            return;
        };
        self.ingest_single_file(id, path, cx);
    }

    pub(crate) fn pick_video_for_block(&mut self, id: BlockId, cx: &mut Context<Self>) {
        let Some(path) = pick_single_file("Videos", VIDEO_EXTENSIONS) else {
            return;
        };
        self.ingest_single_file(id, path, cx);
    }

    fn ingest_single_file(&mut self, id: BlockId, path: PathBuf, cx: &mut Context<Self>) {
        cx.spawn(async move |this, cx| {
            let result = read_as_data_uri(&path);
            this.update(cx, |this, cx| match result {
                Ok(uri) => {
                    this.cache_data_uri(&uri);
                    this.merge_url(&id, uri, cx);
                }
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "file ingestion failed");
                }
            })
            .ok();
        })
        .detach();
    }

    /// Multi-file gallery ingestion. All files are read in submission order
    /// and the successfully-read batch is appended in a single step once
    /// every read has finished.
    pub(crate) fn pick_gallery_images(&mut self, id: BlockId, cx: &mut Context<Self>) {
        if cfg!(test) {
            return;
        }
        let Some(paths) = FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_files()
        else {
            return;
        };
        if paths.is_empty() {
            return;
        }

        cx.spawn(async move |this, cx| {
            let uris = read_batch_as_data_uris(&paths);
            if uris.is_empty() {
                return;
            }

            this.update(cx, |this, cx| {
                for uri in &uris {
                    this.cache_data_uri(uri);
                }
                let Some(block) = this.page.model.block(&id) else {
                    return;
                };
                let BlockContent::Gallery { title, images } = &block.content else {
                    return;
                };
                let mut images = images.clone();
                let title = title.clone();
                images.extend(uris);
                this.commit_content_for_ingest(&id, BlockContent::Gallery { title, images }, cx);
            })
            .ok();
        })
        .detach();
    }
}

fn pick_single_file(filter_name: &str, extensions: &[&str]) -> Option<PathBuf> {
    if cfg!(test) {
        return None;
    }
    FileDialog::new()
        .add_filter(filter_name, extensions)
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;
    use gpui::TestAppContext;
    use std::cell::RefCell;
    use std::io::Write as _;
    use std::rc::Rc;

    #[test]
    fn mime_covers_media_extensions() {
        assert_eq!(mime_for_extension("png"), "image/png");
        assert_eq!(mime_for_extension("JPG"), "image/jpeg");
        assert_eq!(mime_for_extension("webm"), "video/webm");
        assert_eq!(mime_for_extension("mp3"), "audio/mpeg");
    }

    #[test]
    fn unknown_extension_falls_back_to_octet_stream() {
        assert_eq!(mime_for_extension("xyz"), "application/octet-stream");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn encode_then_decode_agree_on_format() {
        let bytes = vec![1u8, 2, 3, 4];
        let uri = encode_data_uri("image/png", &bytes);
        assert!(uri.starts_with("data:image/png;base64,"));

        let (format, decoded) = decode_data_uri(&uri).unwrap();
        assert_eq!(format, gpui::ImageFormat::Png);
        assert_eq!(decoded, bytes);
    }

    #[test]
    fn decode_rejects_non_data_uris() {
        assert!(decode_data_uri("https://example.com/a.png").is_none());
        assert!(decode_data_uri("data:image/png;base64").is_none());
        assert!(decode_data_uri("data:image/png;base64,not-base64!!!").is_none());
    }

    #[test]
    fn decode_rejects_non_image_mimes() {
        let uri = encode_data_uri("video/mp4", &[0u8; 8]);
        assert!(decode_data_uri(&uri).is_none());
    }

    #[test]
    fn read_file_produces_typed_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(&[0x89, 0x50, 0x4e, 0x47]).unwrap();

        let uri = read_as_data_uri(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));

        let (_, bytes) = decode_data_uri(&uri).unwrap();
        assert_eq!(bytes, vec![0x89, 0x50, 0x4e, 0x47]);
    }

    #[test]
    fn read_missing_file_errors() {
        assert!(read_as_data_uri(Path::new("/nonexistent/file.png")).is_err());
    }

    #[test]
    fn batch_read_skips_unreadable_files_and_keeps_order() {
        let dir = tempfile::tempdir().unwrap();

        let first = dir.path().join("a.png");
        std::fs::File::create(&first)
            .unwrap()
            .write_all(&[1u8; 8])
            .unwrap();
        let missing = dir.path().join("missing.jpg");
        let last = dir.path().join("b.webp");
        std::fs::File::create(&last)
            .unwrap()
            .write_all(&[2u8; 8])
            .unwrap();

        let uris = read_batch_as_data_uris(&[first, missing, last]);

        assert_eq!(uris.len(), 2);
        assert!(uris[0].starts_with("data:image/png;base64,"));
        assert!(uris[1].starts_with("data:image/webp;base64,"));

        let (_, bytes) = decode_data_uri(&uris[0]).unwrap();
        assert_eq!(bytes, vec![1u8; 8]);
        let (_, bytes) = decode_data_uri(&uris[1]).unwrap();
        assert_eq!(bytes, vec![2u8; 8]);
    }

    #[test]
    fn batch_read_of_only_unreadable_files_is_empty() {
        let uris = read_batch_as_data_uris(&[
            PathBuf::from("/nonexistent/a.png"),
            PathBuf::from("/nonexistent/b.png"),
        ]);
        assert!(uris.is_empty());
    }

    #[gpui::test]
    fn deleting_a_block_evicts_its_cached_images(cx: &mut TestAppContext) {
        cx.skip_drawing();
        let app_handle: Rc<RefCell<Option<Entity<AppStore>>>> = Rc::new(RefCell::new(None));

        {
            let mut app = cx.app.borrow_mut();
            gpui_component::init(&mut app);
        }

        let app_handle_for_window = app_handle.clone();
        let window = cx.add_window(|window, cx| {
            let app = cx.new(|cx| AppStore::new(window, cx));
            *app_handle_for_window.borrow_mut() = Some(app.clone());
            Root::new(app, window, cx)
        });

        let app = app_handle.borrow().clone().expect("app");
        let uri = encode_data_uri("image/png", &[0u8; 4]);

        let id = cx
            .update_window(*window, |_root, _window, cx| {
                app.update(cx, |app, cx| {
                    let id = app.page.model.push_block(BlockContent::Image {
                        url: uri.clone(),
                        caption: String::new(),
                    });
                    app.cached_image(&uri);
                    cx.notify();
                    id
                })
            })
            .unwrap();

        app.read_with(cx, |app, _| {
            assert!(app.ui.image_cache.contains_key(&uri));
        });

        cx.update_window(*window, |_root, window, cx| {
            app.update(cx, |app, cx| {
                app.delete_block(&id, window, cx);
            });
        })
        .unwrap();

        app.read_with(cx, |app, _| {
            assert!(!app.ui.image_cache.contains_key(&uri));
        });
    }
}
