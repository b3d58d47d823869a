// Stack instructions

use crate::bus::Bus;
use crate::cpu::{flags, Cpu};
use crate::error::Fault;

impl Cpu {
    /// PHA - Push Accumulator
    pub fn pha(&mut self, bus: &mut Bus) -> Result<(), Fault> {
        self.stack_push(bus, self.a)
    }

    /// PLA - Pull Accumulator
    ///
    /// Flags affected: Z, N
    pub fn pla(&mut self, bus: &mut Bus) {
        self.a = self.stack_pull(bus);
        self.update_zero_and_negative_flags(self.a);
    }

    /// PHP - Push Processor Status
    ///
    /// The pushed copy always has B and U set, as on hardware.
    pub fn php(&mut self, bus: &mut Bus) -> Result<(), Fault> {
        self.stack_push(bus, self.status | flags::BREAK | flags::UNUSED)
    }

    /// PLP - Pull Processor Status
    ///
    /// B and U in the pulled byte are discarded; the live bits stay as
    /// they were.
    pub fn plp(&mut self, bus: &mut Bus) {
        let pulled = self.stack_pull(bus);
        let kept = self.status & (flags::BREAK | flags::UNUSED);
        self.status = (pulled & !(flags::BREAK | flags::UNUSED)) | kept;
    }
}
