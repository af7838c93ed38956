// Interface adapters: clocks, input sources, and DTOs/projections for presentation.

pub mod clock;
pub mod input;
pub mod minimap;
pub mod protocol;
pub mod utils;
