//! 단위 정의 및 변환 모듈 모음.

pub mod flow;
pub mod length;
pub mod power;
pub mod pressure;
pub mod temperature;

pub use flow::{convert_flow, FlowUnit};
pub use length::{convert_length, LengthUnit};
pub use power::{convert_power, PowerUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{convert_temperature, TemperatureUnit};
