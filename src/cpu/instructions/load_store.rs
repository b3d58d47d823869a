// Load and Store instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Fault;

impl Cpu {
    // ========================================
    // Loads: memory -> register, updating Z and N
    // ========================================

    /// LDA - Load Accumulator
    ///
    /// Flags affected: Z, N
    pub fn lda(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDX - Load X Register
    ///
    /// Flags affected: Z, N
    pub fn ldx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.x = value;
        self.update_zero_and_negative_flags(value);
    }

    /// LDY - Load Y Register
    ///
    /// Flags affected: Z, N
    pub fn ldy(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.y = value;
        self.update_zero_and_negative_flags(value);
    }

    // ========================================
    // Stores: register -> memory, no flags
    // ========================================

    /// STA - Store Accumulator
    pub fn sta(&mut self, bus: &mut Bus, addr_result: &AddressingResult) -> Result<(), Fault> {
        bus.write(addr_result.address, self.a)
    }

    /// STX - Store X Register
    pub fn stx(&mut self, bus: &mut Bus, addr_result: &AddressingResult) -> Result<(), Fault> {
        bus.write(addr_result.address, self.x)
    }

    /// STY - Store Y Register
    pub fn sty(&mut self, bus: &mut Bus, addr_result: &AddressingResult) -> Result<(), Fault> {
        bus.write(addr_result.address, self.y)
    }
}
