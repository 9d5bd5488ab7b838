//! Tests for frame capture and GIF export

#[cfg(test)]
mod tests {
    use boxes::BoxesError;
    use boxes::color::rgb::Rgb;
    use boxes::io::visualization::FrameCapture;
    use ndarray::Array2;
    use tempfile::TempDir;

    // Tests exporting without frames fails
    // Verified by removing the empty check
    #[test]
    fn test_empty_capture_cannot_export() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let capture = FrameCapture::new(2);
        let result = capture.export_gif(&temp_dir.path().join("empty.gif"), 40);
        assert!(matches!(
            result,
            Err(BoxesError::InvalidParameter { parameter: "frames", .. })
        ));
    }

    // Tests recorded frames are written as a GIF, including very short delays
    // Verified by not creating the output file
    #[test]
    fn test_capture_exports_gif() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let mut capture = FrameCapture::new(2);
        let mut canvas: Array2<Option<Rgb>> = Array2::from_elem((3, 3), None);
        for index in 0..9 {
            if let Some(fill) = canvas.get_mut([index / 3, index % 3]) {
                *fill = Some(Rgb::new(0, 100, 200));
            }
            capture.record(&canvas);
        }
        assert_eq!(capture.frame_count(), 9);

        let path = temp_dir.path().join("out").join("run.gif");
        capture.export_gif(&path, 40).expect("export succeeds");
        assert!(path.exists());

        let fast = temp_dir.path().join("fast.gif");
        capture.export_gif(&fast, 1).expect("export succeeds");
        let size = std::fs::metadata(&fast).expect("file exists").len();
        assert!(size > 0);
    }
}
