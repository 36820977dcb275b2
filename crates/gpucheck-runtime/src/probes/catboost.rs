//! CatBoost probe scripts.

use super::ProbeScripts;

pub(super) const SCRIPTS: ProbeScripts = ProbeScripts {
    module: "catboost",
    accelerator: ACCELERATOR,
    fallback: FALLBACK,
    env: &[],
};

const ACCELERATOR: &str = r#"
import json
import numpy as np
from catboost import CatBoostClassifier
from catboost.utils import get_gpu_device_count

X = np.array([[1, 2], [3, 4], [5, 6], [7, 8]])
y = np.array([0, 1, 0, 1])

model = CatBoostClassifier(iterations=1, task_type="GPU", devices="0", verbose=False)
model.fit(X, y, verbose=False)
proba = [round(float(p), 4) for p in model.predict_proba(X)[:, 1]]

print(json.dumps({
    "backend": "GPU",
    "device_count": int(get_gpu_device_count()),
    "current_device": 0,
    "result": proba,
    "note": "GPU training successful",
}))
"#;

const FALLBACK: &str = r#"
import numpy as np
from catboost import CatBoostClassifier

X = np.array([[1, 2], [3, 4], [5, 6], [7, 8]])
y = np.array([0, 1, 0, 1])

model = CatBoostClassifier(iterations=1, task_type="CPU", verbose=False)
model.fit(X, y, verbose=False)
print(model.predict_proba(X)[:, 1].tolist())
"#;
