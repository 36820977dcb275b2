//! PyTorch probe scripts.
//!
//! The accelerator path prefers CUDA and accepts Apple MPS.

use super::ProbeScripts;

pub(super) const SCRIPTS: ProbeScripts = ProbeScripts {
    module: "torch",
    accelerator: ACCELERATOR,
    fallback: FALLBACK,
    env: &[],
};

const ACCELERATOR: &str = r#"
import json
import torch

if torch.cuda.is_available():
    index = torch.cuda.current_device()
    device = torch.device("cuda", index)
    count = torch.cuda.device_count()
    names = [torch.cuda.get_device_name(i) for i in range(count)]
elif getattr(torch.backends, "mps", None) is not None and torch.backends.mps.is_available():
    index = 0
    device = torch.device("mps")
    count = 1
    names = ["Apple MPS"]
else:
    raise RuntimeError("no CUDA or MPS device is available")

x = torch.tensor([1.0, 2.0], device=device)
y = (x * 2).cpu().tolist()
if y != [2.0, 4.0]:
    raise RuntimeError(f"unexpected result {y}")

print(json.dumps({
    "backend": device.type,
    "device_count": count,
    "current_device": index,
    "device_names": names,
    "result": y,
}))
"#;

const FALLBACK: &str = r#"
import torch

y = (torch.tensor([1.0, 2.0]) * 2).tolist()
if y != [2.0, 4.0]:
    raise RuntimeError(f"unexpected result {y}")
print(y)
"#;
