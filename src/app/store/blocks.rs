//! Pure page model: an ordered list of content blocks. No gpui types here so
//! the whole module stays testable without a window.

use uuid::Uuid;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BlockId(String);

impl BlockId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry in an achievements grid. `count` is display text, not a number:
/// values like "12/15" are valid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AchievementItem {
    pub emoji: String,
    pub title: String,
    pub count: String,
}

impl AchievementItem {
    pub fn new(
        emoji: impl Into<String>,
        title: impl Into<String>,
        count: impl Into<String>,
    ) -> Self {
        Self {
            emoji: emoji.into(),
            title: title.into(),
            count: count.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BlockContent {
    Hero { title: String, subtitle: String },
    Text { title: String, body: String },
    Image { url: String, caption: String },
    Achievements { items: Vec<AchievementItem> },
    Gallery { title: String, images: Vec<String> },
    Video { url: String, title: String },
    Music { url: String, title: String },
}

impl BlockContent {
    pub fn kind(&self) -> BlockKind {
        match self {
            BlockContent::Hero { .. } => BlockKind::Hero,
            BlockContent::Text { .. } => BlockKind::Text,
            BlockContent::Image { .. } => BlockKind::Image,
            BlockContent::Achievements { .. } => BlockKind::Achievements,
            BlockContent::Gallery { .. } => BlockKind::Gallery,
            BlockContent::Video { .. } => BlockKind::Video,
            BlockContent::Music { .. } => BlockKind::Music,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BlockKind {
    Hero,
    Text,
    Image,
    Achievements,
    Gallery,
    Video,
    Music,
}

impl BlockKind {
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::Text,
        Self::Image,
        Self::Achievements,
        Self::Gallery,
        Self::Video,
        Self::Music,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlockKind::Hero => "hero",
            BlockKind::Text => "text",
            BlockKind::Image => "image",
            BlockKind::Achievements => "achievements",
            BlockKind::Gallery => "gallery",
            BlockKind::Video => "video",
            BlockKind::Music => "music",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BlockKind::Hero => "Обложка",
            BlockKind::Text => "Текст",
            BlockKind::Image => "Изображение",
            BlockKind::Achievements => "Достижения",
            BlockKind::Gallery => "Галерея",
            BlockKind::Video => "Видео",
            BlockKind::Music => "Музыка",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub content: BlockContent,
    pub created_at_ms: i64,
}

/// The ordered block store backing the page. Display order is exactly the
/// storage order; new blocks always append.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageModel {
    blocks: Vec<Block>,
}

impl PageModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, id: &BlockId) -> Option<&Block> {
        self.blocks.iter().find(|block| &block.id == id)
    }

    pub fn block_mut(&mut self, id: &BlockId) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|block| &block.id == id)
    }

    pub fn add_block(&mut self, kind: BlockKind) -> BlockId {
        self.push_block(Self::default_content(kind))
    }

    pub fn push_block(&mut self, content: BlockContent) -> BlockId {
        let id = BlockId::generate();
        self.blocks.push(Block {
            id: id.clone(),
            content,
            created_at_ms: chrono::Utc::now().timestamp_millis(),
        });
        id
    }

    /// Removes the block with the given id. Returns whether anything was
    /// removed; deleting an unknown id is a no-op.
    pub fn delete_block(&mut self, id: &BlockId) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|block| &block.id != id);
        self.blocks.len() != before
    }

    /// Replaces the whole content of a block. This is the only mutation path
    /// for block content; partial edits rebuild the content first. Returns
    /// whether the block was found.
    pub fn replace_content(&mut self, id: &BlockId, content: BlockContent) -> bool {
        match self.block_mut(id) {
            Some(block) => {
                block.content = content;
                true
            }
            None => false,
        }
    }

    /// Every media url currently referenced by any block, in page order.
    pub fn media_urls(&self) -> Vec<&str> {
        let mut urls = Vec::new();
        for block in &self.blocks {
            match &block.content {
                BlockContent::Image { url, .. }
                | BlockContent::Video { url, .. }
                | BlockContent::Music { url, .. } => urls.push(url.as_str()),
                BlockContent::Gallery { images, .. } => {
                    urls.extend(images.iter().map(String::as_str));
                }
                BlockContent::Hero { .. }
                | BlockContent::Text { .. }
                | BlockContent::Achievements { .. } => {}
            }
        }
        urls
    }

    pub fn default_content(kind: BlockKind) -> BlockContent {
        match kind {
            BlockKind::Hero => BlockContent::Hero {
                title: "Заголовок".to_string(),
                subtitle: "Подзаголовок".to_string(),
            },
            BlockKind::Text => BlockContent::Text {
                title: "Заголовок".to_string(),
                body: "Текст раздела".to_string(),
            },
            BlockKind::Image => BlockContent::Image {
                url: String::new(),
                caption: String::new(),
            },
            BlockKind::Achievements => BlockContent::Achievements {
                items: vec![AchievementItem::new("🎉", "Достижение", "10")],
            },
            BlockKind::Gallery => BlockContent::Gallery {
                title: "Галерея".to_string(),
                images: Vec::new(),
            },
            BlockKind::Video => BlockContent::Video {
                url: String::new(),
                title: "Видео".to_string(),
            },
            BlockKind::Music => BlockContent::Music {
                url: String::new(),
                title: "Музыка".to_string(),
            },
        }
    }

    /// The demo page shown on first launch.
    pub fn seeded() -> Self {
        let mut model = Self::new();
        model.push_block(BlockContent::Hero {
            title: "Мои итоги 2025 года".to_string(),
            subtitle: "Незабываемый год полный достижений".to_string(),
        });
        model.push_block(BlockContent::Achievements {
            items: vec![
                AchievementItem::new("🎯", "Цели достигнуты", "12/15"),
                AchievementItem::new("📚", "Книг прочитано", "24"),
                AchievementItem::new("✈️", "Стран посещено", "5"),
            ],
        });
        model.push_block(BlockContent::Gallery {
            title: "Лучшие моменты".to_string(),
            images: Vec::new(),
        });
        model.push_block(BlockContent::Text {
            title: "Пожелания на новый год".to_string(),
            body: "Пусть следующий год будет еще ярче, насыщеннее и успешнее!".to_string(),
        });
        model
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_block_appends_to_the_end() {
        let mut model = PageModel::new();
        let first = model.add_block(BlockKind::Hero);
        let second = model.add_block(BlockKind::Text);

        assert_eq!(model.len(), 2);
        assert_eq!(model.blocks()[0].id, first);
        assert_eq!(model.blocks()[1].id, second);
    }

    #[test]
    fn add_block_uses_kind_defaults() {
        let mut model = PageModel::new();
        let id = model.add_block(BlockKind::Gallery);

        let block = model.block(&id).unwrap();
        assert_eq!(
            block.content,
            BlockContent::Gallery {
                title: "Галерея".into(),
                images: Vec::new(),
            }
        );
    }

    #[test]
    fn ids_are_unique_across_additions() {
        let mut model = PageModel::new();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..100 {
            assert!(ids.insert(model.add_block(BlockKind::Text)));
        }
    }

    #[test]
    fn delete_block_preserves_order_of_survivors() {
        let mut model = PageModel::new();
        let a = model.add_block(BlockKind::Hero);
        let b = model.add_block(BlockKind::Text);
        let c = model.add_block(BlockKind::Video);

        assert!(model.delete_block(&b));
        let remaining: Vec<_> = model.blocks().iter().map(|block| &block.id).collect();
        assert_eq!(remaining, vec![&a, &c]);
    }

    #[test]
    fn delete_block_is_idempotent() {
        let mut model = PageModel::new();
        let id = model.add_block(BlockKind::Text);

        assert!(model.delete_block(&id));
        assert!(!model.delete_block(&id));
        assert!(model.is_empty());
    }

    #[test]
    fn delete_unknown_id_leaves_store_untouched() {
        let mut model = PageModel::seeded();
        let snapshot = model.clone();

        assert!(!model.delete_block(&BlockId::generate()));
        assert_eq!(model, snapshot);
    }

    #[test]
    fn replace_content_touches_only_the_target() {
        let mut model = PageModel::new();
        let a = model.add_block(BlockKind::Text);
        let b = model.add_block(BlockKind::Text);

        let updated = BlockContent::Text {
            title: "Новый".into(),
            body: "Текст".into(),
        };
        assert!(model.replace_content(&a, updated.clone()));

        assert_eq!(model.block(&a).unwrap().content, updated);
        assert_eq!(
            model.block(&b).unwrap().content,
            PageModel::default_content(BlockKind::Text)
        );
    }

    #[test]
    fn replace_content_reports_unknown_id() {
        let mut model = PageModel::seeded();
        let snapshot = model.clone();

        let missing = BlockId::generate();
        assert!(!model.replace_content(
            &missing,
            BlockContent::Text {
                title: String::new(),
                body: String::new(),
            }
        ));
        assert_eq!(model, snapshot);
    }

    #[test]
    fn replace_content_keeps_id_stable() {
        let mut model = PageModel::new();
        let id = model.add_block(BlockKind::Hero);
        model.replace_content(
            &id,
            BlockContent::Hero {
                title: "Другой".into(),
                subtitle: "Текст".into(),
            },
        );
        assert!(model.block(&id).is_some());
    }

    #[test]
    fn default_content_matches_kind() {
        for kind in BlockKind::ALL {
            assert_eq!(PageModel::default_content(kind).kind(), kind);
        }
    }

    #[test]
    fn achievements_default_has_single_starter_item() {
        let BlockContent::Achievements { items } =
            PageModel::default_content(BlockKind::Achievements)
        else {
            panic!("expected achievements content");
        };
        assert_eq!(items, vec![AchievementItem::new("🎉", "Достижение", "10")]);
    }

    #[test]
    fn media_urls_cover_every_url_bearing_variant() {
        let mut model = PageModel::new();
        model.push_block(BlockContent::Hero {
            title: String::new(),
            subtitle: String::new(),
        });
        model.push_block(BlockContent::Image {
            url: "data:image/png;base64,AA==".into(),
            caption: String::new(),
        });
        model.push_block(BlockContent::Gallery {
            title: String::new(),
            images: vec!["g1".into(), "g2".into()],
        });
        model.push_block(BlockContent::Video {
            url: "v".into(),
            title: String::new(),
        });
        model.push_block(BlockContent::Music {
            url: "m".into(),
            title: String::new(),
        });

        assert_eq!(
            model.media_urls(),
            vec!["data:image/png;base64,AA==", "g1", "g2", "v", "m"]
        );
    }

    #[test]
    fn seeded_page_layout() {
        let model = PageModel::seeded();
        let kinds: Vec<_> = model
            .blocks()
            .iter()
            .map(|block| block.content.kind())
            .collect();
        assert_eq!(
            kinds,
            vec![
                BlockKind::Hero,
                BlockKind::Achievements,
                BlockKind::Gallery,
                BlockKind::Text,
            ]
        );

        let BlockContent::Achievements { items } = &model.blocks()[1].content else {
            panic!("expected achievements content");
        };
        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Цели достигнуты");
    }
}
