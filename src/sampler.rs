//! Sampling sources a channel can pull raw readings from.

/// Something that produces raw samples on demand, typically an ADC input.
pub trait Sampler<T> {
    type Error;

    fn sample(&mut self) -> Result<T, Self::Error>;
}

/// Sampler backed by a closure. See [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FromFn<F>(F);

/// Use a closure as a sampling source.
///
/// Infallible sources can return `Result<T, core::convert::Infallible>`.
pub fn from_fn<T, E, F>(f: F) -> FromFn<F>
where
    F: FnMut() -> Result<T, E>,
{
    FromFn(f)
}

impl<T, E, F> Sampler<T> for FromFn<F>
where
    F: FnMut() -> Result<T, E>,
{
    type Error = E;

    fn sample(&mut self) -> Result<T, E> {
        (self.0)()
    }
}

#[cfg(feature = "adc")]
pub use self::adc::AdcChannel;

#[cfg(feature = "adc")]
mod adc {
    use core::marker::PhantomData;

    use embedded_hal::adc::{Channel, OneShot};

    use super::Sampler;

    /// An embedded-hal 0.2 one-shot converter bound to one of its input pins.
    ///
    /// Each sample blocks until the conversion completes.
    pub struct AdcChannel<ADC, A, Pin> {
        adc: A,
        pin: Pin,
        _adc: PhantomData<ADC>,
    }

    impl<ADC, A, Pin> AdcChannel<ADC, A, Pin> {
        pub fn new(adc: A, pin: Pin) -> Self {
            Self {
                adc,
                pin,
                _adc: PhantomData,
            }
        }

        /// Release the converter and pin.
        pub fn free(self) -> (A, Pin) {
            (self.adc, self.pin)
        }
    }

    impl<ADC, A, Pin, Word> Sampler<Word> for AdcChannel<ADC, A, Pin>
    where
        A: OneShot<ADC, Word, Pin>,
        Pin: Channel<ADC>,
    {
        type Error = A::Error;

        fn sample(&mut self) -> Result<Word, Self::Error> {
            nb::block!(self.adc.read(&mut self.pin))
        }
    }
}
