//! tests/layout_tests.rs
//! Catalog geometry and slicing invariants

use wacrypt_rs::{detect_layout, ContainerLayout, LAYOUT_CATALOG};

#[test]
fn catalog_ids_are_unique() {
    let mut ids: Vec<&str> = LAYOUT_CATALOG.iter().map(|l| l.id).collect();
    ids.sort_unstable();
    ids.dedup();
    assert_eq!(ids.len(), LAYOUT_CATALOG.len());
}

#[test]
fn every_layout_slices_a_buffer_at_its_minimum() {
    for layout in LAYOUT_CATALOG {
        let raw = vec![0x99u8; layout.min_len()];
        let slices = layout.slice(&raw).unwrap();
        assert_eq!(slices.iv.len(), layout.iv_len, "{}", layout.id);
        assert_eq!(slices.tag.is_some(), layout.has_trailing_tag, "{}", layout.id);
    }
}

#[test]
fn every_layout_rejects_one_byte_short() {
    for layout in LAYOUT_CATALOG {
        let raw = vec![0x99u8; layout.min_len() - 1];
        let err = layout.slice(&raw).unwrap_err();
        assert_eq!(err.actual, layout.min_len() - 1, "{}", layout.id);
    }
}

#[test]
fn empty_buffer_rejects_everywhere_without_panicking() {
    for layout in LAYOUT_CATALOG {
        assert!(layout.slice(&[]).is_err(), "{}", layout.id);
    }
}

#[test]
fn slice_iv_comes_from_the_declared_offset() {
    for layout in LAYOUT_CATALOG {
        let mut raw = vec![0u8; layout.min_len() + 64];
        for (i, byte) in raw.iter_mut().enumerate() {
            *byte = i as u8;
        }
        let slices = layout.slice(&raw).unwrap();
        assert_eq!(
            slices.iv,
            &raw[layout.iv_offset..layout.iv_offset + layout.iv_len],
            "{}",
            layout.id
        );
        assert_eq!(slices.ciphertext.first(), raw.get(layout.header_len));
    }
}

#[test]
fn fast_path_layouts_exist_in_the_catalog() {
    let proto = detect_layout(&[0x0A, 0x22, 0, 0]).unwrap();
    let early = detect_layout(&[0x00, 0x01, 0, 0]).unwrap();
    for hinted in [proto, early] {
        assert!(
            LAYOUT_CATALOG
                .iter()
                .any(|l| std::ptr::eq(l as *const ContainerLayout, hinted)),
            "fast-path layout {} must be a catalog member",
            hinted.id
        );
    }
}

#[test]
fn tagged_layouts_lose_exactly_sixteen_trailing_bytes() {
    for layout in LAYOUT_CATALOG.iter().filter(|l| l.has_trailing_tag) {
        let raw = vec![0u8; layout.min_len() + 100];
        let slices = layout.slice(&raw).unwrap();
        assert_eq!(
            layout.header_len + slices.ciphertext.len() + 16,
            raw.len(),
            "{}",
            layout.id
        );
    }
}
