use recap::app::store::blocks::{AchievementItem, BlockContent, BlockId, BlockKind, PageModel};
use recap::app::store::ingest;
use std::io::Write as _;

#[test]
fn build_page_from_empty_to_full_recap() {
    let mut model = PageModel::new();
    assert!(model.is_empty());

    let hero = model.add_block(BlockKind::Hero);
    let achievements = model.add_block(BlockKind::Achievements);
    let gallery = model.add_block(BlockKind::Gallery);
    let text = model.add_block(BlockKind::Text);

    assert_eq!(model.len(), 4);

    // Retitle the hero the way the editor does: rebuild the whole content.
    assert!(model.replace_content(
        &hero,
        BlockContent::Hero {
            title: "Мои итоги 2025 года".into(),
            subtitle: "Незабываемый год".into(),
        },
    ));

    // Grow the achievements grid.
    let BlockContent::Achievements { mut items } = model.block(&achievements).unwrap().content.clone()
    else {
        panic!("expected achievements content");
    };
    items.push(AchievementItem::new("✈️", "Стран посещено", "5"));
    assert!(model.replace_content(&achievements, BlockContent::Achievements { items }));

    let order: Vec<_> = model.blocks().iter().map(|block| block.id.clone()).collect();
    assert_eq!(order, vec![hero.clone(), achievements, gallery, text]);

    assert!(model.delete_block(&hero));
    assert_eq!(model.len(), 3);
    assert!(model.block(&hero).is_none());
}

#[test]
fn gallery_batch_append_keeps_submission_order() {
    let mut model = PageModel::new();
    let gallery = model.add_block(BlockKind::Gallery);

    // The batch path reads every file first, then appends once.
    let batch: Vec<String> = (0..5)
        .map(|ix| ingest::encode_data_uri("image/png", &[ix as u8]))
        .collect();

    let BlockContent::Gallery { title, mut images } = model.block(&gallery).unwrap().content.clone()
    else {
        panic!("expected gallery content");
    };
    images.extend(batch.clone());
    assert!(model.replace_content(&gallery, BlockContent::Gallery { title, images }));

    let BlockContent::Gallery { images, .. } = &model.block(&gallery).unwrap().content else {
        panic!("expected gallery content");
    };
    assert_eq!(images, &batch);

    // A second batch appends after the first, never replaces it.
    let second: Vec<String> = (5..8)
        .map(|ix| ingest::encode_data_uri("image/png", &[ix as u8]))
        .collect();
    let BlockContent::Gallery { title, mut images } = model.block(&gallery).unwrap().content.clone()
    else {
        panic!("expected gallery content");
    };
    images.extend(second.clone());
    model.replace_content(&gallery, BlockContent::Gallery { title, images });

    let BlockContent::Gallery { images, .. } = &model.block(&gallery).unwrap().content else {
        panic!("expected gallery content");
    };
    assert_eq!(images.len(), 8);
    assert_eq!(&images[5..], &second[..]);
}

#[test]
fn single_file_merge_preserves_sibling_fields() {
    let mut model = PageModel::new();
    let image = model.add_block(BlockKind::Image);

    model.replace_content(
        &image,
        BlockContent::Image {
            url: String::new(),
            caption: "Закат".into(),
        },
    );

    // The ingest path rebuilds content with only the url overridden.
    let uri = ingest::encode_data_uri("image/jpeg", &[0xff, 0xd8]);
    let BlockContent::Image { caption, .. } = model.block(&image).unwrap().content.clone() else {
        panic!("expected image content");
    };
    model.replace_content(
        &image,
        BlockContent::Image {
            url: uri.clone(),
            caption,
        },
    );

    assert_eq!(
        model.block(&image).unwrap().content,
        BlockContent::Image {
            url: uri,
            caption: "Закат".into(),
        }
    );
}

#[test]
fn mutations_on_unknown_ids_leave_the_page_bit_identical() {
    let mut model = PageModel::seeded();
    let snapshot = model.clone();
    let ghost = BlockId::generate();

    assert!(!model.delete_block(&ghost));
    assert!(!model.replace_content(
        &ghost,
        BlockContent::Text {
            title: String::new(),
            body: String::new(),
        },
    ));
    assert_eq!(model, snapshot);
}

#[test]
fn ingested_files_round_trip_through_data_uris() {
    let dir = tempfile::tempdir().expect("tempdir");

    let mut paths = Vec::new();
    for (ix, name) in ["a.png", "b.jpg", "c.webp"].iter().enumerate() {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).expect("create fixture");
        file.write_all(&[ix as u8; 16]).expect("write fixture");
        paths.push(path);
    }

    let uris: Vec<String> = paths
        .iter()
        .map(|path| ingest::read_as_data_uri(path).expect("read fixture"))
        .collect();

    assert!(uris[0].starts_with("data:image/png;base64,"));
    assert!(uris[1].starts_with("data:image/jpeg;base64,"));
    assert!(uris[2].starts_with("data:image/webp;base64,"));

    for (ix, uri) in uris.iter().enumerate() {
        let (_, bytes) = ingest::decode_data_uri(uri).expect("decode");
        assert_eq!(bytes, vec![ix as u8; 16]);
    }
}

#[test]
fn every_kind_is_addable_and_renders_to_its_own_variant() {
    let mut model = PageModel::new();
    for kind in BlockKind::ALL {
        let id = model.add_block(kind);
        assert_eq!(model.block(&id).unwrap().content.kind(), kind);
    }
    assert_eq!(model.len(), BlockKind::ALL.len());
}
