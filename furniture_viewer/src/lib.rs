/*!
# Furniture Viewer

Viewer core for furniture-assembly models: scene contents, a perspective
camera with an orbit target, and automatic camera framing once a model has
loaded.

Windowing, GPU rendering and asset fetching belong to the host; it feeds
this crate loaded geometry and window events, and reads back the camera.

## Architecture

- **RenderContext**: owns camera, scene and orbit controls; handles events
- **framer**: fits the camera to a loose bounding sphere of the scene
- **Scene**: meshes and lights under stable slot-map keys
- **PerspectiveCamera / Frustum**: pose, projection and visibility tests
- **assembly**: the pedestal and slab table models and the cut list
*/

// Internal modules
mod error;
mod viewer;
mod config;
mod context;
pub mod log;
pub mod camera;
pub mod scene;
pub mod framer;
pub mod assembly;

// Main furniture namespace module
pub mod furniture {
    // Error types
    pub use crate::error::{Error, Result};

    // Logging front end
    pub use crate::viewer::Viewer;

    // Configuration
    pub use crate::config::{FramingConfig, ViewerConfig, DEFAULT_FALLBACK_DIRECTION};

    // Per-instance state
    pub use crate::context::{RenderContext, MODEL_NODE_NAME, KEY_LIGHT_NAME, TOGGLE_TARGET_KEY};

    // Logging sub-module (types only; the viewer_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    pub mod camera {
        pub use crate::camera::*;
    }

    pub mod scene {
        pub use crate::scene::*;
    }

    pub mod framer {
        pub use crate::framer::{frame, estimate_bounds, fit_distance, FrameResult};
    }

    pub mod assembly {
        pub use crate::assembly::*;
    }
}

// Re-export math library at crate root
pub use glam;
