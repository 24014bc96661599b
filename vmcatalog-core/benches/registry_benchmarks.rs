use std::sync::Arc;

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use vmcatalog_core::{InstallRegistry, NullInstallModel, VmInstall};

struct BenchInstall {
    id: String,
}

impl VmInstall for BenchInstall {
    fn id(&self) -> &str {
        &self.id
    }
}

fn populated_registry(count: usize) -> InstallRegistry {
    let reg = InstallRegistry::new(Arc::new(NullInstallModel));
    for i in 0..count {
        let id = format!("vm-{i}");
        let owned = id.clone();
        reg.insert_with(&id, move || Arc::new(BenchInstall { id: owned }))
            .unwrap();
    }
    reg
}

fn bench_registry(c: &mut Criterion) {
    let reg = populated_registry(100);

    c.bench_function("find_install_hit", |b| {
        b.iter(|| reg.find_install(black_box("vm-99")))
    });

    c.bench_function("find_install_miss", |b| {
        b.iter(|| reg.find_install(black_box("vm-missing")))
    });

    c.bench_function("installs_snapshot_100", |b| b.iter(|| reg.installs()));

    c.bench_function("create_then_dispose", |b| {
        b.iter(|| {
            reg.insert_with("transient", || {
                Arc::new(BenchInstall {
                    id: "transient".into(),
                })
            })
            .unwrap();
            reg.remove(black_box("transient")).unwrap();
        })
    });
}

criterion_group!(benches, bench_registry);
criterion_main!(benches);
