// Logical instructions

use crate::bus::Bus;
use crate::cpu::addressing::AddressingResult;
use crate::cpu::{flags, Cpu};

impl Cpu {
    /// AND - Logical AND with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn and(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a &= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// ORA - Logical OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn ora(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a |= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// EOR - Exclusive OR with Accumulator
    ///
    /// Flags affected: Z, N
    pub fn eor(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);
        self.a ^= value;
        self.update_zero_and_negative_flags(self.a);
    }

    /// BIT - Bit Test
    ///
    /// Z from A & M; N and V copied straight from bits 7 and 6 of the
    /// operand. The accumulator is not modified.
    ///
    /// Flags affected: Z, V, N
    pub fn bit(&mut self, bus: &mut Bus, addr_result: &AddressingResult) {
        let value = self.read_operand(bus, addr_result);

        self.set_zero(self.a & value == 0);
        self.update_flag(flags::NEGATIVE, value & 0x80 != 0);
        self.update_flag(flags::OVERFLOW, value & 0x40 != 0);
    }
}

#[cfg(test)]
mod tests {
    use crate::bus::Bus;
    use crate::cpu::addressing::AddressingResult;
    use crate::cpu::Cpu;

    #[test]
    fn test_and() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::for_tests();
        cpu.a = 0b1100_1100;

        cpu.and(&mut bus, &AddressingResult::immediate(0b1010_1010));
        assert_eq!(cpu.a, 0b1000_1000);
        assert!(cpu.get_negative());
    }

    #[test]
    fn test_ora_eor() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::for_tests();

        cpu.a = 0x0F;
        cpu.ora(&mut bus, &AddressingResult::immediate(0xF0));
        assert_eq!(cpu.a, 0xFF);

        cpu.eor(&mut bus, &AddressingResult::immediate(0xFF));
        assert_eq!(cpu.a, 0x00);
        assert!(cpu.get_zero());
    }

    #[test]
    fn test_bit_copies_high_bits() {
        let mut cpu = Cpu::new();
        let mut bus = Bus::for_tests();
        bus.write(0x0010, 0xC0).unwrap();
        cpu.a = 0x3F;

        cpu.bit(&mut bus, &AddressingResult::new(0x0010));

        assert!(cpu.get_zero(), "A & M == 0");
        assert!(cpu.get_negative(), "N from operand bit 7");
        assert!(cpu.get_overflow(), "V from operand bit 6");
    }
}
