//! TensorFlow probe scripts.
//!
//! TensorFlow logs heavily to stderr on import; every TensorFlow script runs
//! with `TF_CPP_MIN_LOG_LEVEL=2`, set on the child process only.

use super::ProbeScripts;

pub(super) const SCRIPTS: ProbeScripts = ProbeScripts {
    module: "tensorflow",
    accelerator: ACCELERATOR,
    fallback: FALLBACK,
    env: &[("TF_CPP_MIN_LOG_LEVEL", "2")],
};

// Soft device placement would quietly run on the CPU, so the result
// tensor's device is checked as well as the device list.
const ACCELERATOR: &str = r#"
import json
import tensorflow as tf

gpus = tf.config.list_physical_devices("GPU")
if not gpus:
    raise RuntimeError("no GPU devices visible to TensorFlow")

with tf.device("/GPU:0"):
    a = tf.constant([1.0, 2.0])
    b = a * 2

if "GPU" not in b.device.upper():
    raise RuntimeError(f"computation was placed on {b.device}")

values = b.numpy().tolist()
if values != [2.0, 4.0]:
    raise RuntimeError(f"unexpected result {values}")

print(json.dumps({
    "device_count": len(gpus),
    "current_device": 0,
    "device_names": [gpu.name for gpu in gpus],
    "result": values,
}))
"#;

const FALLBACK: &str = r#"
import tensorflow as tf

with tf.device("/CPU:0"):
    b = tf.constant([1.0, 2.0]) * 2

values = b.numpy().tolist()
if values != [2.0, 4.0]:
    raise RuntimeError(f"unexpected result {values}")
print(values)
"#;
