// benches/read_benchmark.rs
use byteorder::{LittleEndian, WriteBytesExt};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pcap_classic::*;
use std::path::{Path, PathBuf};

const PACKETS: u32 = 10_000;

fn write_capture(dir: &Path, payload_len: usize) -> PathBuf {
    let mut out = Vec::new();
    out.write_u32::<LittleEndian>(FileHeader::MAGIC_MICROSECONDS).unwrap();
    out.write_u16::<LittleEndian>(2).unwrap();
    out.write_u16::<LittleEndian>(4).unwrap();
    out.write_i32::<LittleEndian>(0).unwrap();
    out.write_u32::<LittleEndian>(0).unwrap();
    out.write_u32::<LittleEndian>(65535).unwrap();
    out.write_u32::<LittleEndian>(1).unwrap();

    let payload = vec![0x5au8; payload_len];
    for i in 0..PACKETS {
        out.write_u32::<LittleEndian>(i).unwrap();
        out.write_u32::<LittleEndian>(0).unwrap();
        out.write_u32::<LittleEndian>(payload_len as u32).unwrap();
        out.write_u32::<LittleEndian>(payload_len as u32).unwrap();
        out.extend_from_slice(&payload);
    }

    let path = dir.join(format!("bench_{}.pcap", payload_len));
    std::fs::write(&path, out).unwrap();
    path
}

fn drain(path: &Path, mode: BufferMode) -> u64 {
    let config = ReaderConfig::new().with_buffer_mode(mode);
    let mut reader = PcapReader::open_with_config(path, config).unwrap();
    let mut bytes = 0u64;
    while let Some(packet) = reader.read_next_packet().unwrap() {
        bytes += packet.payload().len() as u64;
    }
    reader.close().unwrap();
    bytes
}

fn benchmark_read(c: &mut Criterion) {
    let dir = tempfile::tempdir().unwrap();
    let mut group = c.benchmark_group("read_packets");

    for payload_len in [64usize, 512, 1514].iter() {
        let path = write_capture(dir.path(), *payload_len);
        group.throughput(Throughput::Elements(PACKETS as u64));

        group.bench_with_input(BenchmarkId::new("reuse", payload_len), &path, |b, path| {
            b.iter(|| drain(path, BufferMode::Reuse));
        });
        group.bench_with_input(BenchmarkId::new("owned", payload_len), &path, |b, path| {
            b.iter(|| drain(path, BufferMode::Owned));
        });
        group.bench_with_input(BenchmarkId::new("count", payload_len), &path, |b, path| {
            b.iter(|| count(path).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_read);
criterion_main!(benches);
