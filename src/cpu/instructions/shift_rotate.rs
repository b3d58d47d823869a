// Shift and rotate instructions
//
// Each operates on the accumulator or read-modify-writes a memory
// location. Shifts set C from the bit shifted out; rotates rotate through
// C.

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::Cpu;
use crate::error::Fault;

impl Cpu {
    /// Fetch the shift operand: the accumulator or the addressed byte
    fn shift_operand(&self, bus: &mut Bus, addr_result: &AddressingResult, acc: bool) -> u8 {
        if acc {
            self.a
        } else {
            bus.read(addr_result.address)
        }
    }

    /// Store the shift result back where it came from
    fn shift_store(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        acc: bool,
        result: u8,
    ) -> Result<(), Fault> {
        if acc {
            self.a = result;
            Ok(())
        } else {
            bus.write(addr_result.address, result)
        }
    }

    /// ASL - Arithmetic Shift Left
    ///
    /// C takes bit 7; bit 0 becomes 0.
    ///
    /// Flags affected: C, Z, N
    pub fn asl(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        acc: bool,
    ) -> Result<(), Fault> {
        let value = self.shift_operand(bus, addr_result, acc);
        let result = value << 1;

        self.set_carry(value & 0x80 != 0);
        self.update_zero_and_negative_flags(result);
        self.shift_store(bus, addr_result, acc, result)
    }

    /// LSR - Logical Shift Right
    ///
    /// C takes bit 0; bit 7 becomes 0.
    ///
    /// Flags affected: C, Z, N (N always clears)
    pub fn lsr(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        acc: bool,
    ) -> Result<(), Fault> {
        let value = self.shift_operand(bus, addr_result, acc);
        let result = value >> 1;

        self.set_carry(value & 0x01 != 0);
        self.update_zero_and_negative_flags(result);
        self.shift_store(bus, addr_result, acc, result)
    }

    /// ROL - Rotate Left through Carry
    ///
    /// Flags affected: C, Z, N
    pub fn rol(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        acc: bool,
    ) -> Result<(), Fault> {
        let value = self.shift_operand(bus, addr_result, acc);
        let result = (value << 1) | self.get_carry() as u8;

        self.set_carry(value & 0x80 != 0);
        self.update_zero_and_negative_flags(result);
        self.shift_store(bus, addr_result, acc, result)
    }

    /// ROR - Rotate Right through Carry
    ///
    /// Flags affected: C, Z, N
    pub fn ror(
        &mut self,
        bus: &mut Bus,
        addr_result: &AddressingResult,
        acc: bool,
    ) -> Result<(), Fault> {
        let value = self.shift_operand(bus, addr_result, acc);
        let result = (value >> 1) | ((self.get_carry() as u8) << 7);

        self.set_carry(value & 0x01 != 0);
        self.update_zero_and_negative_flags(result);
        self.shift_store(bus, addr_result, acc, result)
    }
}
