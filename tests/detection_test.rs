use yologrid_rs::{
    Anchor, BoundingBox, DecoderConfig, DecoderConfigBuilder, DetectionError, GridDecoder, Rect,
    Suppressor, iou_matrix,
};

/// Two anchors, three classes, 4x4 grid on a 64-pixel image.
fn test_config() -> DecoderConfig {
    DecoderConfigBuilder::new()
        .grid_size(4)
        .image_size(64)
        .anchors([(1.0, 1.0), (3.0, 2.0)])
        .labels(["person", "car", "bicycle"])
        .build()
}

/// Write one raw prediction into a channel-major tensor.
fn set_prediction(
    tensor: &mut [f32],
    config: &DecoderConfig,
    row: usize,
    col: usize,
    anchor: usize,
    values: &[f32],
) {
    let s = config.grid_size;
    let base = anchor * config.box_channels();
    for (i, &v) in values.iter().enumerate() {
        tensor[(base + i) * s * s + row * s + col] = v;
    }
}

#[test]
fn test_decode_then_suppress_picks_planted_objects() {
    let config = test_config();
    let decoder = GridDecoder::new(config.clone()).unwrap();
    let suppressor = Suppressor::new(5, 0.5).unwrap();

    let mut tensor = vec![0.0; config.tensor_len()];
    // A confident "car" in cell (1, 1) and a confident "person" in (3, 3),
    // far enough apart that neither suppresses the other.
    set_prediction(
        &mut tensor,
        &config,
        1,
        1,
        0,
        &[0.0, 0.0, 0.0, 0.0, 6.0, 0.0, 5.0, 0.0],
    );
    set_prediction(
        &mut tensor,
        &config,
        3,
        3,
        1,
        &[0.0, 0.0, 0.0, 0.0, 4.0, 5.0, 0.0, 0.0],
    );

    let candidates = decoder.decode(&tensor).unwrap();
    assert_eq!(candidates.len(), 4 * 4 * 2);

    let detections = suppressor.suppress(&candidates);
    assert!(detections.len() <= 5);

    // The planted car is the strongest candidate and must lead the output.
    assert_eq!(detections[0].label, "car");
    assert!(detections[0].confidence > 0.9);
    assert_eq!(detections[0].rect.center(), (24.0, 24.0));

    let person = detections
        .iter()
        .find(|b| b.label == "person")
        .expect("planted person must survive suppression");
    assert_eq!(person.rect.center(), (56.0, 56.0));
    // Anchor (3, 2) scaled by the 16-pixel cell.
    assert!((person.rect.width - 48.0).abs() < 1e-4);
    assert!((person.rect.height - 32.0).abs() < 1e-4);
}

#[test]
fn test_suppressed_output_has_no_overlap_above_threshold() {
    let config = test_config();
    let decoder = GridDecoder::new(config.clone()).unwrap();
    let suppressor = Suppressor::new(usize::MAX, 0.5).unwrap();

    // A noisy tensor so candidate boxes overlap heavily across cells.
    let tensor: Vec<f32> = (0..config.tensor_len())
        .map(|i| ((i * 31) % 17) as f32 / 4.0 - 2.0)
        .collect();

    let candidates = decoder.decode(&tensor).unwrap();
    let detections = suppressor.suppress(&candidates);
    assert!(detections.len() <= candidates.len());

    let rects: Vec<Rect> = detections.iter().map(|b| b.rect).collect();
    let ious = iou_matrix(&rects, &rects);
    for i in 0..rects.len() {
        for j in 0..rects.len() {
            if i != j {
                assert!(ious[[i, j]] < 0.5);
            }
        }
    }
}

#[test]
fn test_known_overlap_pair_keeps_stronger_box() {
    // IoU of these two is 81/119, about 0.68, so only A survives at 0.5.
    let a = BoundingBox::new(Rect::new(0.0, 0.0, 10.0, 10.0), 0.9, 14, "person");
    let b = BoundingBox::new(Rect::new(1.0, 1.0, 10.0, 10.0), 0.4, 14, "person");
    assert!((a.iou(&b) - 0.6807).abs() < 1e-3);

    let suppressor = Suppressor::new(5, 0.5).unwrap();
    assert_eq!(suppressor.suppress(&[a.clone(), b]), vec![a]);
}

#[test]
fn test_decoder_rejects_foreign_tensor_shape() {
    let decoder = GridDecoder::new(test_config()).unwrap();

    // A 13x13 VOC tensor fed to a 4x4 three-class decoder.
    let err = decoder.decode(&vec![0.0; 125 * 13 * 13]).unwrap_err();
    assert!(matches!(err, DetectionError::ShapeMismatch { .. }));
}

#[test]
fn test_default_voc_decode_counts() {
    let decoder = GridDecoder::new(DecoderConfig::default()).unwrap();
    let candidates = decoder.decode(&vec![0.0; 125 * 13 * 13]).unwrap();

    // 13 x 13 cells x 5 anchors, each at sigmoid(0) / 20 confidence.
    assert_eq!(candidates.len(), 13 * 13 * 5);
    for b in &candidates {
        assert!((b.confidence - 0.5 / 20.0).abs() < 1e-6);
    }
}

#[test]
fn test_anchor_tuple_conversion() {
    let anchor: Anchor = (1.08, 1.19).into();
    assert_eq!(anchor, Anchor::new(1.08, 1.19));
}
