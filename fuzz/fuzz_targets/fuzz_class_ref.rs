#![no_main]

use std::sync::mpsc;
use std::sync::Mutex;
use std::sync::OnceLock;
use std::time::Duration;

use jwriter_classfile::{parse_class_descriptor, ClassRef};
use jwriter_types_bridge::from_resolved_class;
use libfuzzer_sys::fuzz_target;

mod utils;

const TIMEOUT: Duration = Duration::from_secs(1);

struct Runner {
    input_tx: mpsc::SyncSender<String>,
    output_rx: Mutex<mpsc::Receiver<()>>,
}

fn check(text: &str) {
    for class in [ClassRef::for_name(text), parse_class_descriptor(text)]
        .into_iter()
        .flatten()
    {
        let _ = from_resolved_class(&class);
        assert_eq!(parse_class_descriptor(&class.descriptor()).as_ref(), Ok(&class));
    }
}

fn runner() -> &'static Runner {
    static RUNNER: OnceLock<Runner> = OnceLock::new();
    RUNNER.get_or_init(|| {
        let (input_tx, input_rx) = mpsc::sync_channel::<String>(0);
        let (output_tx, output_rx) = mpsc::sync_channel::<()>(0);

        // Deeply nested array descriptors recurse; give the worker room for them.
        std::thread::Builder::new()
            .stack_size(16 * 1024 * 1024)
            .spawn(move || {
                for input in input_rx {
                    check(&input);
                    let _ = output_tx.send(());
                }
            })
            .expect("failed to spawn fuzz_class_ref worker");

        Runner {
            input_tx,
            output_rx: Mutex::new(output_rx),
        }
    })
}

fuzz_target!(|data: &[u8]| {
    let Some(text) = utils::truncate_utf8(data) else {
        return;
    };

    let runner = runner();
    runner
        .input_tx
        .send(text.to_string())
        .expect("fuzz_class_ref worker thread exited");

    match runner
        .output_rx
        .lock()
        .expect("fuzz_class_ref worker receiver poisoned")
        .recv_timeout(TIMEOUT)
    {
        Ok(()) => {}
        Err(mpsc::RecvTimeoutError::Timeout) => panic!("fuzz_class_ref fuzz target timed out"),
        Err(mpsc::RecvTimeoutError::Disconnected) => {
            panic!("fuzz_class_ref worker thread panicked")
        }
    }
});
