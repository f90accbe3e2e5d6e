use criterion::{Criterion, criterion_group, criterion_main};
use guibuild::dispatch::{Invocation, Settings, backend_args};
use guibuild::{BuildConfig, ParseOptions, parse_args};
use std::hint::black_box;

const FULL_ARGS: &[&str] = &[
    "pyinstaller",
    "--main",
    "src/app.py",
    "--name",
    "Benchmark App",
    "--icon",
    "assets/icon.ico",
    "--onefile",
    "--clean",
    "--framework",
    "pyside6",
    "--some-unknown-flag",
];

fn bench_parse(c: &mut Criterion) {
    let options = ParseOptions::default();

    c.bench_function("parse_args_full", |b| {
        b.iter(|| parse_args(black_box(FULL_ARGS), &options).unwrap())
    });

    c.bench_function("parse_args_help_scan", |b| {
        let mut args = FULL_ARGS.to_vec();
        args.push("--help");
        b.iter(|| parse_args(black_box(args.as_slice()), &options).unwrap())
    });
}

fn bench_invocation(c: &mut Criterion) {
    let config = BuildConfig {
        app_name: Some("Benchmark App".into()),
        icon_path: Some("assets/icon.ico".into()),
        onefile: true,
        ..Default::default()
    };
    let settings = Settings::new("/opt/guibuild");

    c.bench_function("backend_args", |b| b.iter(|| backend_args(black_box(&config))));

    c.bench_function("invocation_command_line", |b| {
        b.iter(|| Invocation::new(black_box(&config), &settings).command_line())
    });
}

criterion_group!(benches, bench_parse, bench_invocation);
criterion_main!(benches);
