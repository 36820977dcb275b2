//! XGBoost probe scripts.
//!
//! XGBoost 2.x selects the GPU with `device="cuda"`; 1.x uses
//! `tree_method="gpu_hist"`. Both are handled.

use super::ProbeScripts;

pub(super) const SCRIPTS: ProbeScripts = ProbeScripts {
    module: "xgboost",
    accelerator: ACCELERATOR,
    fallback: FALLBACK,
    env: &[],
};

// XGBoost quietly trains on the CPU when `device="cuda"` finds no visible
// GPU, so the visible devices are counted through the CUDA driver first and
// the trained booster's device is checked afterwards.
const ACCELERATOR: &str = r#"
import ctypes
import json
import sys
import numpy as np
import xgboost as xgb

driver = "nvcuda.dll" if sys.platform == "win32" else "libcuda.so.1"
try:
    cuda = ctypes.CDLL(driver)
except OSError as exc:
    raise RuntimeError(f"CUDA driver not found: {exc}") from exc

count = ctypes.c_int(0)
if cuda.cuInit(0) != 0 or cuda.cuDeviceGetCount(ctypes.byref(count)) != 0:
    raise RuntimeError("CUDA driver could not enumerate devices")
if count.value == 0:
    raise RuntimeError("no visible CUDA device")

names = []
for index in range(count.value):
    handle = ctypes.c_int(0)
    buffer = ctypes.create_string_buffer(256)
    if cuda.cuDeviceGet(ctypes.byref(handle), index) == 0 and \
            cuda.cuDeviceGetName(buffer, 256, handle) == 0:
        names.append(buffer.value.decode(errors="replace"))

rng = np.random.default_rng(42)
X = rng.normal(size=(100, 4))
y = (X[:, 0] + X[:, 1] > 0).astype(int)
dtrain = xgb.DMatrix(X, label=y)

params = {"objective": "binary:logistic", "eval_metric": "logloss", "verbosity": 1}
major = int(xgb.__version__.split(".")[0])
if major >= 2:
    if not xgb.build_info().get("USE_CUDA", False):
        raise RuntimeError("XGBoost was built without CUDA support")
    params.update({"device": "cuda:0", "tree_method": "hist"})
    method = "device=cuda:0"
else:
    params.update({"tree_method": "gpu_hist", "gpu_id": 0})
    method = "gpu_hist"

history = {}
booster = xgb.train(params, dtrain, num_boost_round=1, evals=[(dtrain, "train")],
                    evals_result=history, verbose_eval=False)

config = json.loads(booster.save_config())
device = config.get("learner", {}).get("generic_param", {}).get("device")
if device is not None and not device.startswith("cuda"):
    raise RuntimeError(f"training ran on {device}")

loss = round(float(history["train"]["logloss"][-1]), 4)

print(json.dumps({
    "backend": "cuda",
    "device_count": count.value,
    "current_device": 0,
    "device_names": names,
    "result": loss,
    "note": f"GPU training successful with {method}",
}))
"#;

const FALLBACK: &str = r#"
import numpy as np
import xgboost as xgb

rng = np.random.default_rng(42)
X = rng.normal(size=(100, 4))
y = (X[:, 0] + X[:, 1] > 0).astype(int)
dtrain = xgb.DMatrix(X, label=y)

params = {"objective": "binary:logistic", "eval_metric": "logloss",
          "verbosity": 0, "tree_method": "hist"}
xgb.train(params, dtrain, num_boost_round=1, verbose_eval=False)
print("ok")
"#;
