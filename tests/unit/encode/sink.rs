use super::*;

fn solid(width: u32, height: u32, px: [u8; 4]) -> FrameRGBA {
    FrameRGBA {
        width,
        height,
        data: px.repeat((width * height) as usize),
        premultiplied: true,
    }
}

#[test]
fn in_memory_sink_keeps_frames_across_runs() {
    let mut sink = InMemorySink::new();
    let cfg = SinkConfig {
        width: 2,
        height: 2,
    };
    sink.begin(cfg.clone()).unwrap();
    sink.push_frame(FrameIndex(0), &solid(2, 2, [0, 0, 0, 255]))
        .unwrap();
    sink.end().unwrap();
    sink.begin(cfg.clone()).unwrap();
    sink.push_frame(FrameIndex(1), &solid(2, 2, [9, 9, 9, 255]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.config(), Some(cfg));
    assert_eq!(sink.runs(), 2);
    let idx: Vec<u64> = sink.frames().iter().map(|(i, _)| i.0).collect();
    assert_eq!(idx, vec![0, 1]);
}

#[test]
fn png_sequence_names_files_by_frame_index() {
    let dir = std::env::temp_dir().join(format!("chromaplot_sink_{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);

    let mut sink = PngSequenceSink::new(&dir, "f_");
    sink.begin(SinkConfig {
        width: 3,
        height: 2,
    })
    .unwrap();
    sink.push_frame(FrameIndex(7), &solid(3, 2, [128, 0, 0, 128]))
        .unwrap();
    sink.end().unwrap();

    assert_eq!(sink.written(), &[dir.join("f_00007.png")]);
    let img = image::open(dir.join("f_00007.png")).unwrap().to_rgba8();
    assert_eq!(img.dimensions(), (3, 2));
    assert_eq!(img.get_pixel(0, 0).0, [255, 0, 0, 128]);

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn write_png_reports_io_errors() {
    let missing = std::env::temp_dir()
        .join("chromaplot_no_such_dir")
        .join("nested")
        .join("x.png");
    let err = write_png(&missing, &solid(1, 1, [0, 0, 0, 255])).unwrap_err();
    assert!(matches!(err, PlotError::Io(_)));
}
