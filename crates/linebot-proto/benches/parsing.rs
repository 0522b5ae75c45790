//! Benchmarks for line parsing and command dispatch.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use linebot_proto::{Dispatcher, ParsedCommand};

/// Bare command
const SIMPLE_LINE: &str = "PING :irc.example.com";

/// Line with sender prefix and trailing argument
const PREFIX_LINE: &str = ":nick!user@host PRIVMSG #channel :Hello, world!";

/// Many middle arguments
const MANY_ARGS_LINE: &str = ":server 005 nick CHANTYPES=# PREFIX=(ov)@+ NICKLEN=30 CASEMAPPING=rfc1459 :are supported by this server";

/// Chat command
const COMMAND_MESSAGE: &str = "!reverse The quick brown fox jumps over the lazy dog";

fn benchmark_parsing(c: &mut Criterion) {
    let mut group = c.benchmark_group("Line Parsing");

    group.bench_function("simple", |b| {
        b.iter(|| {
            let cmd: ParsedCommand = black_box(SIMPLE_LINE).parse().unwrap();
            black_box(cmd)
        })
    });

    group.bench_function("with_prefix", |b| {
        b.iter(|| {
            let cmd: ParsedCommand = black_box(PREFIX_LINE).parse().unwrap();
            black_box(cmd)
        })
    });

    group.bench_function("many_args", |b| {
        b.iter(|| {
            let cmd: ParsedCommand = black_box(MANY_ARGS_LINE).parse().unwrap();
            black_box(cmd)
        })
    });

    group.finish();
}

fn benchmark_dispatch(c: &mut Criterion) {
    let dispatcher = Dispatcher::new();
    let mut group = c.benchmark_group("Command Dispatch");

    group.bench_function("reverse", |b| {
        b.iter(|| black_box(dispatcher.respond(black_box(COMMAND_MESSAGE)).unwrap()))
    });

    group.bench_function("not_found", |b| {
        b.iter(|| black_box(dispatcher.respond(black_box("!missing some text")).unwrap()))
    });

    group.finish();
}

fn benchmark_serialization(c: &mut Criterion) {
    let cmd: ParsedCommand = PREFIX_LINE.parse().unwrap();

    c.bench_function("display", |b| b.iter(|| black_box(&cmd).to_string()));
}

criterion_group!(
    benches,
    benchmark_parsing,
    benchmark_dispatch,
    benchmark_serialization
);
criterion_main!(benches);
